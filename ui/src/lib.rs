// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod grid;
pub mod presenter;
mod screens;

use components::pico::Container;
use screens::transactions::TransactionsScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let css = r#"
    * { box-sizing: border-box; }

    .app-main-container header {
        padding: 0 1rem;
        margin-bottom: 0;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    /* Keep the filter row under the sticky header. */
    table thead tr:nth-child(2) th {
        position: sticky;
        top: 2.5rem;
        z-index: 10;
        background: var(--pico-card-background-color);
    }

    fieldset label input[type=checkbox] { margin-right: 0.35rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet { href: PICO_CSS }
        style { "{css}" }
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul { li { strong { "Transaction Explorer" } } }
                    }
                }
                TransactionsScreen {}
            }
        }
    }
}
