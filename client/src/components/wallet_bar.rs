//! Wallet connect/disconnect bar.

use leptos::prelude::*;

use crate::net::context::ChainContext;
use crate::state::notice::{NoticeSource, NoticeState};
use crate::state::wallet::{ConnectionStatus, WalletState};
use crate::util::display::short_address;
use crate::util::prompt;

#[component]
pub fn WalletBar() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let chain = expect_context::<RwSignal<Option<ChainContext>>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_connect = move |_| {
        if wallet.with_untracked(|w| w.provider_missing) {
            prompt::alert(crate::net::wallet::NO_PROVIDER_MESSAGE);
            return;
        }
        wallet.update(|w| w.status = ConnectionStatus::Connecting);
        notices.update(|n| n.clear_source(NoticeSource::Wallet));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::wallet::{InjectedProvider, WalletClient};

            let client = WalletClient::new(InjectedProvider);
            match client.request_accounts().await {
                Ok(accounts) => wallet.update(|w| w.apply_accounts(&accounts)),
                Err(e) => {
                    leptos::logging::warn!("wallet connection failed: {e}");
                    wallet.update(WalletState::disconnect);
                    if !e.is_user_rejection() {
                        notices.update(|n| {
                            n.error(NoticeSource::Wallet, "Connection Failed", &e.to_string());
                        });
                    }
                }
            }
            if let Ok(id) = client.chain_id().await {
                wallet.update(|w| w.chain_id = Some(id));
            }
        });
    };
    let on_disconnect = move |_| wallet.update(WalletState::disconnect);

    let account_text = move || {
        wallet.with(|w| w.account.map_or_else(|| "Not connected".to_owned(), |a| short_address(&a)))
    };
    let wrong_network = move || {
        let expected = chain.with(|c| c.as_ref().map(|c| c.config.chain_id));
        expected.is_some_and(|id| wallet.with(|w| w.wrong_network(id)))
    };
    let connecting = move || wallet.with(|w| w.status == ConnectionStatus::Connecting);

    view! {
        <header class="wallet-bar">
            <div class="wallet-bar__brand">
                <h1>"Gold Stable Token"</h1>
                <p>"Premium collateralized stablecoin backed by gold reserves"</p>
            </div>
            <span class="wallet-bar__account">{account_text}</span>
            <Show when=wrong_network>
                <span class="wallet-bar__warning">"Wrong network"</span>
            </Show>
            <Show
                when=move || wallet.with(WalletState::is_connected)
                fallback=move || {
                    view! {
                        <button class="wallet-bar__button" disabled=connecting on:click=on_connect>
                            {move || if connecting() { "Connecting..." } else { "Connect Wallet" }}
                        </button>
                    }
                }
            >
                <button class="wallet-bar__button" on:click=on_disconnect>
                    "Disconnect"
                </button>
            </Show>
        </header>
    }
}
