//! Dismissible banner messages.

use crate::state::{Notice, NoticeKind};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NoticeListProps {
    pub notices: Vec<Notice>,
    /// Called with the notice id when its dismiss button is pressed
    pub on_dismiss: EventHandler<u64>,
}

/// Stack of dismissible banners, colored by notice kind.
#[component]
pub fn NoticeList(props: NoticeListProps) -> Element {
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            for notice in props.notices.iter() {
                {
                    let (bg, fg, border) = notice_colors(notice.kind);
                    let id = notice.id;
                    let text = notice.text.clone();
                    rsx! {
                        div {
                            style: "display: flex; justify-content: space-between; align-items: center; gap: 8px; padding: 8px 12px; margin: 6px 0; border-radius: 4px; background: {bg}; color: {fg}; border: 1px solid {border};",
                            span { "{text}" }
                            button {
                                style: "border: none; background: none; cursor: pointer; color: {fg}; font-weight: bold;",
                                onclick: move |_| on_dismiss.call(id),
                                "x"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn notice_colors(kind: NoticeKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        NoticeKind::Info => ("#EFF6FF", "#1D4ED8", "#BFDBFE"),
        NoticeKind::Success => ("#ECFDF5", "#047857", "#A7F3D0"),
        NoticeKind::Error => ("#FFEBEE", "#C62828", "#EF9A9A"),
    }
}
