use super::{auth_view::AuthView, game_view::GameView, shop_view::ShopView};
use crate::config::GameConfig;
use crate::state::{
    BrowserStorage, GameSession, GameStore, KeyValueStore, MemoryStorage, PurchaseOutcome, Ticker,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(PartialEq, Clone)]
enum View {
    Game,
    Shop,
}

fn open_store(prefix: &str) -> Rc<dyn KeyValueStore> {
    match BrowserStorage::local(prefix) {
        Ok(store) => Rc::new(store),
        Err(err) => {
            tracing::warn!(%err, prefix, "localStorage unavailable; progress will not be saved");
            Rc::new(MemoryStorage::new())
        }
    }
}

// Config overrides live under the default prefix and may move the records.
fn open_session() -> GameSession {
    let defaults = GameConfig::default();
    let boot = open_store(&defaults.storage_prefix);
    let config = match GameStore::new(boot.clone()).load_config() {
        Ok(Some(cfg)) => cfg,
        Ok(None) => defaults.clone(),
        Err(err) => {
            tracing::warn!(%err, "ignoring unreadable config override");
            defaults.clone()
        }
    };
    let records = if config.storage_prefix == defaults.storage_prefix {
        boot
    } else {
        open_store(&config.storage_prefix)
    };
    let credentials = open_store(&config.credential_prefix);
    GameSession::launch(config, credentials, records)
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_mut_ref(open_session);
    let snapshot = use_state(|| session.borrow().snapshot());
    let tick_interval_ms = *use_state(|| session.borrow().config().tick_interval_ms);
    let view = use_state(|| View::Game);

    // Re-render from session notifications
    {
        let session = session.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let id = session
                .borrow_mut()
                .subscribe(move |snap| snapshot.set(snap.clone()));
            move || session.borrow_mut().unsubscribe(id)
        });
    }

    // Passive income runs behind both the game and shop screens, never on
    // the password screen
    {
        let session = session.clone();
        use_effect_with(
            (snapshot.authenticated, tick_interval_ms),
            move |&(authenticated, period)| {
                let ticker = if authenticated {
                    match Ticker::start(period, move || session.borrow_mut().tick()) {
                        Ok(t) => Some(t),
                        Err(err) => {
                            tracing::error!(%err, "couldn't start passive income");
                            None
                        }
                    }
                } else {
                    None
                };
                move || {
                    if let Some(t) = ticker {
                        t.cancel();
                    }
                }
            },
        );
    }

    let on_authenticate = {
        let session = session.clone();
        Callback::from(move |candidate: String| session.borrow_mut().check_password(&candidate))
    };
    let on_set_password = {
        let session = session.clone();
        Callback::from(move |password: String| session.borrow_mut().set_password(&password))
    };
    let on_click = {
        let session = session.clone();
        Callback::from(move |_| session.borrow_mut().click())
    };
    let on_purchase = {
        let session = session.clone();
        Callback::from(move |item: String| {
            let result = session.borrow_mut().purchase(&item);
            match result {
                Ok(PurchaseOutcome::Purchased {
                    name,
                    owned,
                    remaining,
                }) => tracing::debug!(item = %name, owned, remaining, "shop updated"),
                Ok(PurchaseOutcome::InsufficientFunds { price, balance }) => {
                    tracing::debug!(item = %item, price, balance, "purchase refused")
                }
                Err(err) => tracing::warn!(%err, item = %item, "purchase failed"),
            }
        })
    };

    let to_game = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Game))
    };
    let to_shop = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Shop))
    };

    if !snapshot.authenticated {
        return html! { <AuthView on_authenticate={on_authenticate} /> };
    }

    match *view {
        View::Game => html! { <GameView
            clicks={snapshot.clicks}
            rate={snapshot.rate}
            has_password={snapshot.has_password}
            on_click={on_click}
            to_shop={to_shop}
            on_set_password={on_set_password}
        /> },
        View::Shop => html! { <ShopView
            clicks={snapshot.clicks}
            items={snapshot.items.clone()}
            on_purchase={on_purchase}
            to_game={to_game}
        /> },
    }
}
