use deskaway_core::{TimelineEntry, TimelineStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct JourneyTimelineProps {
    pub entries: Vec<TimelineEntry>,
    #[prop_or_default]
    pub class: Classes,
}

const fn badge(status: TimelineStatus) -> (&'static str, &'static str) {
    match status {
        TimelineStatus::Confirmed => ("badge badge-accent", "✨ Confirmed"),
        TimelineStatus::Active => ("badge badge-primary", "🌴 Active"),
    }
}

/// "Your Island Story": one row per journey entry, in the order given.
#[function_component(JourneyTimeline)]
pub fn journey_timeline(props: &JourneyTimelineProps) -> Html {
    let class = classes!("timeline", "timeline-vertical", props.class.clone());
    html! {
        <section class="journey" aria-labelledby="journey-title">
            <h3 id="journey-title" class="text-lg font-display font-semibold">{ "Your Island Story" }</h3>
            <p class="text-sm italic opacity-70">{ "Every adventure starts with a yes" }</p>
            <ul class={class} data-testid="journey-timeline">
                { for props.entries.iter().map(|entry| {
                    let (badge_class, badge_label) = badge(entry.status);
                    html! {
                        <li key={entry.id.clone()} data-entry-id={entry.id.clone()} data-status={entry.status.key()}>
                            <div class="timeline-middle"></div>
                            <div class="timeline-end timeline-box">
                                <h4 class="font-semibold">
                                    { entry.title.clone() }
                                    <span class={badge_class}>{ badge_label }</span>
                                </h4>
                                <p class="text-sm opacity-70">{ entry.time.clone() }</p>
                                <p class="text-sm italic opacity-70">{ format!("\"{}\"", entry.description) }</p>
                            </div>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
