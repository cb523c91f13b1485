//! Shared page furniture: navbar, footer, and the dashboard sidebar layout.

use super::PageContext;
use crate::{
    navigator::Navigator,
    state::PageId,
    view::{DomEvent, Element, EventDetail},
};

/// Build a click handler that navigates to `page`.
pub fn go(navigator: &Navigator, page: PageId) -> impl Fn(&EventDetail) + 'static {
    let navigator = navigator.clone();
    move |_| navigator.navigate(page)
}

fn nav_link(ctx: &PageContext, page: PageId, label: &str) -> Element {
    let active = if ctx.state().current_page == page {
        "navbar-link active"
    } else {
        "navbar-link"
    };

    Element::new("li").child(
        Element::new("a")
            .class(active)
            .on(DomEvent::Click, go(&ctx.navigator(), page))
            .text(label),
    )
}

pub fn navbar(ctx: &PageContext) -> Element {
    let navigator = ctx.navigator();
    let actions = ctx.actions();
    let signed_in = ctx.state().user.is_some();

    let session_items = if signed_in {
        vec![
            nav_link(ctx, PageId::Dashboard, "Dashboard"),
            Element::new("li").child(
                Element::new("button")
                    .class("btn btn-primary btn-sm")
                    .on(DomEvent::Click, {
                        let actions = actions.clone();
                        move |_| actions.logout()
                    })
                    .text("Log out"),
            ),
        ]
    } else {
        vec![
            Element::new("li").child(
                Element::new("button")
                    .class("btn btn-outline btn-sm")
                    .on(DomEvent::Click, go(&navigator, PageId::Login))
                    .text("Log in"),
            ),
            Element::new("li").child(
                Element::new("button")
                    .class("btn btn-primary btn-sm")
                    .on(DomEvent::Click, go(&navigator, PageId::Register))
                    .text("Get started"),
            ),
        ]
    };

    Element::new("nav").class("navbar").child(
        Element::new("div")
            .class("navbar-content")
            .child(
                Element::new("a")
                    .class("navbar-logo")
                    .on(DomEvent::Click, go(&navigator, PageId::Home))
                    .child(Element::new("span").text("\u{1f3ad}"))
                    .child(Element::new("span").text("ActorAI Pro")),
            )
            .child(
                Element::new("ul")
                    .class("navbar-menu")
                    .child(nav_link(ctx, PageId::Home, "Home"))
                    .child(nav_link(ctx, PageId::Demo, "Demo"))
                    .child(session_items)
                    .child(
                        Element::new("li").child(
                            Element::new("button")
                                .class("btn btn-ghost btn-sm")
                                .attr("aria-label", "Toggle theme")
                                .on(DomEvent::Click, move |_| actions.toggle_theme())
                                .text("\u{1f313}"),
                        ),
                    ),
            ),
    )
}

pub fn footer(ctx: &PageContext) -> Element {
    let navigator = ctx.navigator();

    fn section(title: &str, links: Vec<Element>) -> Element {
        Element::new("div")
            .class("footer-section")
            .child(Element::new("h6").text(title))
            .child(Element::new("ul").class("footer-links").children(
                links
                    .into_iter()
                    .map(|link| Element::new("li").child(link)),
            ))
    }

    Element::new("footer").class("footer").child(
        Element::new("div")
            .class("footer-content")
            .child(
                Element::new("div")
                    .class("footer-section")
                    .child(Element::new("h6").text("ActorAI Pro"))
                    .child(
                        Element::new("p")
                            .class("text-secondary")
                            .text("AI-powered coaching for working actors."),
                    ),
            )
            .child(section("Product", vec![
                Element::new("a")
                    .class("footer-link")
                    .on(DomEvent::Click, go(&navigator, PageId::Demo))
                    .text("Demo"),
                Element::new("a").class("footer-link").text("Pricing"),
                Element::new("a").class("footer-link").text("Features"),
            ]))
            .child(section("Resources", vec![
                Element::new("a").class("footer-link").text("Blog"),
                Element::new("a").class("footer-link").text("Tutorials"),
                Element::new("a").class("footer-link").text("Support"),
            ]))
            .child(
                Element::new("div")
                    .class("footer-section")
                    .child(Element::new("h6").text("Contact"))
                    .child(
                        Element::new("p")
                            .class("text-secondary")
                            .text("hello@actorai.example"),
                    ),
            ),
    )
}

pub fn sidebar(ctx: &PageContext) -> Element {
    let navigator = ctx.navigator();
    let current = ctx.state().current_page;

    let menu_items: [(PageId, &str, &str); 5] = [
        (PageId::Dashboard, "\u{1f3e0}", "Dashboard"),
        (PageId::Scripts, "\u{1f4dc}", "Scripts"),
        (PageId::Rehearsal, "\u{1f3ad}", "Rehearsal Studio"),
        (PageId::Recordings, "\u{1f3ac}", "Recordings"),
        (PageId::Analytics, "\u{1f4ca}", "Analytics"),
    ];

    // Explicit guard: the identity block only exists for a signed-in user.
    let identity = ctx.state().user.as_ref().map(|user| {
        Element::new("div")
            .class("mb-6")
            .style("padding", "1rem")
            .style("background", "var(--background)")
            .style("border-radius", "8px")
            .child(
                Element::new("div")
                    .style("font-weight", "600")
                    .style("margin-bottom", "0.25rem")
                    .text(user.name.clone()),
            )
            .child(
                Element::new("div")
                    .class("text-secondary")
                    .style("font-size", "12px")
                    .text(user.email.clone()),
            )
    });

    Element::new("aside")
        .class("sidebar")
        .child(
            Element::new("div")
                .class("navbar-logo")
                .style("margin-bottom", "2rem")
                .child(Element::new("span").text("\u{1f3ad}"))
                .child(Element::new("span").text("ActorAI Pro")),
        )
        .child(identity)
        .child(
            Element::new("ul")
                .class("sidebar-menu")
                .children(menu_items.into_iter().map(|(page, icon, label)| {
                    let class = if current == page {
                        "sidebar-link active"
                    } else {
                        "sidebar-link"
                    };

                    Element::new("li").class("sidebar-item").child(
                        Element::new("a")
                            .class(class)
                            .on(DomEvent::Click, go(&navigator, page))
                            .child(Element::new("span").text(icon))
                            .child(Element::new("span").text(label)),
                    )
                })),
        )
}

/// The sidebar layout every workspace page shares.
pub fn workspace(ctx: &PageContext, content: Element) -> Element {
    Element::new("div")
        .class("dashboard-layout")
        .child(sidebar(ctx))
        .child(Element::new("main").class("dashboard-main").child(content))
}
