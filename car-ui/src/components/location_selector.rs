//! Dropdown selector for choosing a catalog place.

use car_core::catalog::Place;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LocationSelectorProps {
    /// Visible label (e.g., "From")
    pub label: String,
    /// DOM id for the select element
    pub select_id: String,
    /// Address of the currently selected place, empty while unselected
    pub selected_address: String,
    /// Called with the chosen place, or None when the placeholder is re-picked
    pub on_select: EventHandler<Option<Place>>,
}

/// Place dropdown fed by the embedded catalog. Options are keyed by place
/// name; the placeholder row maps back to None.
#[component]
pub fn LocationSelector(props: LocationSelectorProps) -> Element {
    let places = use_signal(Place::get_place_vector);
    let list = places.read().clone();
    let selected_address = props.selected_address.clone();
    let on_select = props.on_select;

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        let hit = places.read().iter().find(|p| p.name == value).cloned();
        on_select.call(hit);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.select_id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label}: "
            }
            select {
                id: "{props.select_id}",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected_address.is_empty(),
                    "Select a location..."
                }
                for place in list.iter() {
                    option {
                        value: "{place.name}",
                        selected: place.address == selected_address,
                        "{place.name}"
                    }
                }
            }
        }
    }
}
