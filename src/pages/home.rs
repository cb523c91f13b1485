use super::{chrome, PageContext};
use crate::{
    state::PageId,
    view::{DomEvent, Element, VNode},
};

pub fn view(ctx: &PageContext) -> VNode {
    Element::new("div")
        .child(chrome::navbar(ctx))
        .child(hero(ctx))
        .child(features())
        .child(how_it_works())
        .child(chrome::footer(ctx))
        .into()
}

fn hero(ctx: &PageContext) -> Element {
    let navigator = ctx.navigator();

    Element::new("section").class("hero fade-in").child(
        Element::new("div")
            .class("container")
            .child(
                Element::new("h1")
                    .class("mb-6")
                    .text("Transform your acting with AI"),
            )
            .child(
                Element::new("p")
                    .class("text-secondary")
                    .style("font-size", "20px")
                    .style("max-width", "600px")
                    .style("margin", "0 auto 2rem")
                    .text(
                        "Master your craft with AI script analysis, virtual scene \
                         partners, and performance analytics.",
                    ),
            )
            .child(
                Element::new("div")
                    .class("flex gap-4 justify-center")
                    .child(
                        Element::new("button")
                            .class("btn btn-primary btn-lg")
                            .on(DomEvent::Click, chrome::go(&navigator, PageId::Demo))
                            .text("\u{1f3ac} Try the demo"),
                    )
                    .child(
                        Element::new("button")
                            .class("btn btn-outline btn-lg")
                            .on(DomEvent::Click, chrome::go(&navigator, PageId::Register))
                            .text("Get started"),
                    ),
            )
            .child(
                Element::new("div")
                    .class("mt-8")
                    .style("font-size", "60px")
                    .style("opacity", "0.3")
                    .text("\u{1f3ad}"),
            ),
    )
}

fn features() -> Element {
    let features = [
        (
            "\u{1f9e0}",
            "Script Analysis",
            "Deep analysis of objectives, obstacles, and emotional arcs using \
             proven acting methodologies.",
        ),
        (
            "\u{1f4ac}",
            "AI Scene Partner",
            "Rehearse scenes with an intelligent partner that responds \
             naturally to your performance.",
        ),
        (
            "\u{1f4ca}",
            "Performance Analysis",
            "Detailed feedback on emotional authenticity, vocal delivery, and \
             physical presence.",
        ),
        (
            "\u{1f4c8}",
            "Progress Tracking",
            "Watch your growth through comprehensive analytics and \
             personalised coaching tips.",
        ),
    ];

    Element::new("section").class("section").child(
        Element::new("div").class("container").child(
            Element::new("div").class("grid grid-4").children(
                features.into_iter().map(|(icon, title, description)| {
                    Element::new("div")
                        .class("card slide-up")
                        .child(
                            Element::new("div")
                                .style("font-size", "40px")
                                .style("margin-bottom", "1rem")
                                .text(icon),
                        )
                        .child(Element::new("h4").class("mb-4").text(title))
                        .child(
                            Element::new("p")
                                .class("text-secondary")
                                .text(description),
                        )
                }),
            ),
        ),
    )
}

fn how_it_works() -> Element {
    let steps = [
        ("\u{1f4dd}", "Upload your script", "Paste a scene or pick one from the sample library."),
        ("\u{1f916}", "Let the AI work", "Objectives, obstacles, and beats are broken down for you."),
        ("\u{1f3c6}", "Rehearse and improve", "Practise with a scene partner and track every take."),
    ];

    Element::new("section")
        .class("section")
        .style("background", "var(--surface)")
        .child(
            Element::new("div")
                .class("container")
                .child(
                    Element::new("div")
                        .class("text-center mb-8")
                        .child(Element::new("h2").text("How it works")),
                )
                .child(Element::new("div").class("grid grid-3").children(
                    steps.into_iter().map(|(icon, title, description)| {
                        Element::new("div")
                            .class("text-center")
                            .child(
                                Element::new("div")
                                    .class("mb-4")
                                    .style("font-size", "48px")
                                    .text(icon),
                            )
                            .child(Element::new("h4").class("mb-4").text(title))
                            .child(
                                Element::new("p")
                                    .class("text-secondary")
                                    .text(description),
                            )
                    }),
                )),
        )
}
