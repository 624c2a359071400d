pub mod activities_panel;
pub mod equipment_panel;
pub mod events_panel;
pub mod logistics_panel;
pub mod volcano_trek_card;
