use dioxus::prelude::*;

use crate::components::UsageDashboard;
use crate::usage::query::SortQuery;
use crate::TAILWIND_CSS;

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // reportSort / creditSort live in the query string
    #[route("/?:..query")]
    UsageDashboard { query: SortQuery },
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        // Page container
        div { class: "min-h-screen bg-slate-950 text-slate-100 p-6",
            Router::<Route> {}
        }
    }
}
