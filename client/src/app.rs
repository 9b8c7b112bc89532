//! Root application component with routing and context providers.

use chain::events::TxEvents;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::context::ChainContext;
use crate::pages::home::HomePage;
use crate::state::{
    contract::ContractPanelState, nft::NftGalleryState, notice::NoticeState, token::TokenPanelState,
    wallet::WalletState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    provide_context(RwSignal::new(WalletState::default()));
    provide_context(RwSignal::new(None::<ChainContext>));
    provide_context(RwSignal::new(TokenPanelState::default()));
    provide_context(RwSignal::new(ContractPanelState::default()));
    provide_context(RwSignal::new(NftGalleryState::default()));
    provide_context(RwSignal::new(NoticeState::default()));
    provide_context(TxEvents::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/goldstable.css"/>
        <Title text="Gold Stable Token"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
