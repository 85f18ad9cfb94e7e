//! Map container component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id Leaflet renders into
    pub id: String,
    /// Height in pixels; Leaflet needs an explicit height to lay out tiles
    #[props(default = 460)]
    pub height: u32,
}

/// A sized container div for the Leaflet map. The JS bridge finds the
/// element by id, so ids must be unique per page.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "height: {}px; width: 100%; border-radius: 8px; border: 1px solid #e5e7eb;",
        props.height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
