pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Dashboard frame.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |   Opened tabs    |
/// |  (aside)  |     (main)       |
/// +------------------------------+
/// ```
///
/// The navigation zone collapses when `left_open` is off; the tabs keep
/// their state because the zone is only hidden.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let collapsed = move || !ctx.left_open.get();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body" class:app-body--nav-collapsed=collapsed>
                <aside data-zone="left" class="app-nav" class:hidden=collapsed>
                    {left()}
                </aside>
                <main data-zone="center" class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
