use yew::prelude::*;

#[derive(Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: AttrValue,
    pub value: AttrValue,
}

impl FilterOption {
    #[must_use]
    pub fn new(label: impl Into<AttrValue>, value: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FacetFilterProps {
    pub options: Vec<FilterOption>,
    #[prop_or_default]
    pub selected: Vec<AttrValue>,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired with the value whose button was pressed; the owner flips it.
    #[prop_or_default]
    pub on_toggle: Callback<AttrValue>,
}

/// Multi-select chip group. Selection state is owned by the parent.
#[function_component(FacetFilter)]
pub fn facet_filter(props: &FacetFilterProps) -> Html {
    let class = classes!("filter", "flex", "gap-2", "flex-wrap", props.class.clone());
    html! {
        <div class={class} role="group" aria-label={props.label.clone()}>
            { for props.options.iter().map(|opt| {
                let active = props.selected.contains(&opt.value);
                let toggle = {
                    let on_toggle = props.on_toggle.clone();
                    let value = opt.value.clone();
                    Callback::from(move |_| on_toggle.emit(value.clone()))
                };
                let mut button_class = classes!("btn", "btn-sm", "btn-outline");
                if active {
                    button_class.push("btn-active");
                }
                html! {
                    <button type="button" class={button_class} data-value={opt.value.clone()} aria-pressed={active.to_string()} onclick={toggle}>{ opt.label.clone() }</button>
                }
            }) }
        </div>
    }
}
