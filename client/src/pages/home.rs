//! Home page: wallet bar, notices, and the three panels once connected.
//!
//! SYSTEM CONTEXT
//! ==============
//! On first client render the page loads the host configuration (contract
//! addresses and RPC proxy path), restores an already-authorized wallet
//! account, and subscribes to provider account/chain changes.

use leptos::prelude::*;

use crate::components::contract_panel::ContractPanel;
use crate::components::nft_gallery::NftGallery;
use crate::components::notice_banner::NoticeBanner;
use crate::components::token_panel::TokenPanel;
use crate::components::wallet_bar::WalletBar;
use crate::net::context::ChainContext;
use crate::state::notice::NoticeState;
use crate::state::wallet::WalletState;

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let chain = expect_context::<RwSignal<Option<ChainContext>>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| bootstrap(wallet, chain, notices));
    #[cfg(not(feature = "hydrate"))]
    let _ = (chain, notices);

    view! {
        <div class="home-page">
            <WalletBar/>
            <NoticeBanner/>
            <Show
                when=move || wallet.with(WalletState::is_connected)
                fallback=|| {
                    view! {
                        <section class="connect-cta">
                            <h2>"Connect Your Wallet"</h2>
                            <p>"Connect a wallet to mint GOF, redeem it, and collect NFTs."</p>
                        </section>
                    }
                }
            >
                <main class="home-page__panels">
                    <TokenPanel/>
                    <ContractPanel/>
                    <NftGallery/>
                </main>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn bootstrap(wallet: RwSignal<WalletState>, chain: RwSignal<Option<ChainContext>>, notices: RwSignal<NoticeState>) {
    use crate::net::wallet::{InjectedProvider, WalletClient, watch_provider};
    use crate::state::notice::NoticeSource;

    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_config().await {
            Ok(config) => chain.set(Some(ChainContext::new(config))),
            Err(e) => {
                leptos::logging::warn!("config load failed: {e}");
                notices.update(|n| {
                    n.error(NoticeSource::Wallet, "Configuration Unavailable", &e);
                });
            }
        }
    });

    if !InjectedProvider::is_available() {
        wallet.update(|w| w.provider_missing = true);
        return;
    }

    leptos::task::spawn_local(async move {
        let client = WalletClient::new(InjectedProvider);
        if let Ok(accounts) = client.accounts().await {
            wallet.update(|w| w.apply_accounts(&accounts));
        }
        if let Ok(id) = client.chain_id().await {
            wallet.update(|w| w.chain_id = Some(id));
        }
    });

    watch_provider(
        move |accounts| wallet.update(|w| w.apply_accounts(&accounts)),
        move |chain_id| wallet.update(|w| w.chain_id = chain_id),
    );
}
