use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn ExitView() -> Element {
    let ctx = use_context::<AppContext>();
    let exit_url = ctx.exit_url().map(str::to_string);

    rsx! {
        div { class: "page exit-page",
            h2 { "You left the quiz" }
            if let Some(url) = exit_url {
                p {
                    "Continue at "
                    a { class: "exit-link", href: "{url}", "{url}" }
                }
            }
            // Coming back starts a fresh session.
            Link { class: "exit-back", to: Route::Quiz {}, "Back to the first question" }
        }
    }
}
