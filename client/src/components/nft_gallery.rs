//! NFT Gallery: mintable token ids with their artwork.

use std::sync::Arc;

use leptos::prelude::*;

use crate::actions::Refresh;
use crate::actions::nft::{enumerate, handle_mint, subscribe_refreshes};
use crate::components::{PanelHandle, prompt_on_error};
use crate::state::nft::NftGalleryState;
use crate::state::notice::NoticeState;
use crate::util::media::media_src;

#[component]
pub fn NftGallery() -> impl IntoView {
    let gallery = expect_context::<RwSignal<NftGalleryState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let handle = PanelHandle::mount();

    let refresh: Refresh = Arc::new(move || {
        handle.spawn(move |cx| async move { enumerate(&cx, &gallery).await });
    });
    handle.unsubscribe_on_cleanup(subscribe_refreshes(&handle.events(), refresh));

    Effect::new(move |_| {
        let (_, ready) = handle.track_session();
        if ready {
            handle.spawn(move |cx| async move { enumerate(&cx, &gallery).await });
        }
    });

    let on_mint = move |token_id: u64, uri: String| {
        handle.spawn(move |cx| async move {
            prompt_on_error(handle_mint(&cx, &gallery, &notices, token_id, &uri).await);
        });
    };

    view! {
        <section class="panel nft-gallery">
            <h2 class="panel__title">"NFT Collection"</h2>
            <p class="panel__label">"Mint your NFT"</p>
            <Show
                when=move || !gallery.with(|s| s.loading)
                fallback=|| view! { <p class="panel__hint">"Loading NFTs..."</p> }
            >
                <Show
                    when=move || gallery.with(|s| !s.items.is_empty())
                    fallback=|| view! { <p class="panel__hint">"No NFTs available for minting."</p> }
                >
                    <div class="nft-gallery__grid">
                        <For
                            each=move || gallery.get().items
                            key=|item| item.token_id
                            children=move |item| {
                                let token_id = item.token_id;
                                let uri = item.uri.clone();
                                view! {
                                    <button
                                        class="nft-gallery__card"
                                        disabled=move || !gallery.with(NftGalleryState::can_mint)
                                        on:click=move |_| on_mint(token_id, uri.clone())
                                    >
                                        <img
                                            class="nft-gallery__image"
                                            src=media_src(&item.uri)
                                            alt=format!("NFT #{token_id}")
                                        />
                                        <span class="nft-gallery__label">{format!("NFT #{token_id}")}</span>
                                        <Show when=move || gallery.with(|s| s.is_minting(token_id))>
                                            <span class="nft-gallery__status">"Minting..."</span>
                                        </Show>
                                    </button>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
