//! Dismissible banner stack for the notice channel.

use leptos::prelude::*;

use crate::state::notice::{NoticeLevel, NoticeState};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-banner" role="status">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.level {
                        NoticeLevel::Error => "notice notice--error",
                        NoticeLevel::Success => "notice notice--success",
                    };
                    view! {
                        <div class=class>
                            <div class="notice__body">
                                <p class="notice__title">{notice.title}</p>
                                <p class="notice__message">{notice.message}</p>
                            </div>
                            <button
                                class="notice__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
