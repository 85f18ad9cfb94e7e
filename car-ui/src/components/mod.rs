//! Reusable Dioxus RSX components for the clean-air route apps.

mod alert_card;
mod loading_spinner;
mod location_selector;
mod map_container;
mod notices;
mod page_header;
mod pollution_panel;
mod route_card;
mod saved_route_card;
mod severity_badge;

pub use alert_card::AlertCard;
pub use loading_spinner::LoadingSpinner;
pub use location_selector::LocationSelector;
pub use map_container::MapContainer;
pub use notices::NoticeList;
pub use page_header::PageHeader;
pub use pollution_panel::PollutionPanel;
pub use route_card::RouteCard;
pub use saved_route_card::SavedRouteCard;
pub use severity_badge::SeverityBadge;
