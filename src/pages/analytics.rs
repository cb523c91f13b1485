use super::{chrome, dashboard::signed_out, PageContext};
use crate::view::{Element, VNode};

pub fn view(ctx: &PageContext) -> VNode {
    if ctx.state().user.is_none() {
        return signed_out(ctx);
    }

    let state = ctx.state();

    let best = state.recordings.iter().map(|r| r.score).max().unwrap_or(0);
    let takes = state.recordings.len();

    let score_bars = Element::new("div")
        .class("card mb-6")
        .child(Element::new("h4").class("mb-6").text("Scores over time"))
        .children(state.recordings.iter().rev().map(|recording| {
            Element::new("div")
                .class("mb-4")
                .child(
                    Element::new("div")
                        .class("flex justify-between mb-2")
                        .child(
                            Element::new("span")
                                .class("text-secondary")
                                .text(recording.date.clone()),
                        )
                        .child(Element::new("span").text(recording.score.to_string())),
                )
                .child(
                    Element::new("div").class("progress-bar").child(
                        Element::new("div")
                            .class("progress-fill")
                            .style("width", format!("{}%", recording.score)),
                    ),
                )
        }));

    let focus_areas = [
        ("Emotional range", "Push further into vulnerability in quiet beats."),
        ("Vocal variety", "Vary tempo across long verse passages."),
        ("Physical stillness", "Hold the stillness longer before the reveal."),
    ];

    let summary = Element::new("div").class("grid grid-3 mb-8").children(
        [
            ("\u{1f3ac}", takes.to_string(), "Total takes"),
            ("\u{1f3c6}", best.to_string(), "Best score"),
            ("\u{23f1}", "4.2h".to_string(), "Practice this week"),
        ]
        .into_iter()
        .map(|(icon, value, label)| {
            Element::new("div")
                .class("stat-card")
                .child(Element::new("div").style("font-size", "32px").text(icon))
                .child(Element::new("div").class("stat-value").text(value))
                .child(Element::new("div").class("stat-label").text(label))
        }),
    );

    drop(state);

    chrome::workspace(
        ctx,
        Element::new("div")
            .class("fade-in")
            .child(Element::new("h2").class("mb-8").text("Analytics"))
            .child(summary)
            .child(score_bars)
            .child(
                Element::new("div")
                    .class("card")
                    .child(Element::new("h4").class("mb-6").text("Focus areas"))
                    .children(focus_areas.into_iter().map(|(title, tip)| {
                        Element::new("div")
                            .class("mb-4")
                            .child(Element::new("div").style("font-weight", "500").text(title))
                            .child(Element::new("p").class("text-secondary").text(tip))
                    })),
            ),
    )
    .into()
}
