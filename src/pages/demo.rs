use super::{chrome, PageContext};
use crate::{
    state::{ChatRole, DemoState, DemoTab, SceneAnalysis, METHODOLOGIES},
    view::{DomEvent, Element, VNode},
};

pub fn view(ctx: &PageContext) -> VNode {
    let demo = ctx.state().demo.clone();

    let content = match demo.active_tab {
        DemoTab::Analysis => analysis_tab(ctx, &demo),
        DemoTab::Partner => partner_tab(ctx, &demo),
        DemoTab::Performance => performance_tab(),
    };

    Element::new("div")
        .child(chrome::navbar(ctx))
        .child(
            Element::new("section").class("section").child(
                Element::new("div")
                    .class("container")
                    .child(Element::new("h2").class("mb-8").text("Try ActorAI Pro"))
                    .child(tab_group(ctx, demo.active_tab))
                    .child(content),
            ),
        )
        .child(chrome::footer(ctx))
        .into()
}

fn tab_group(ctx: &PageContext, active: DemoTab) -> Element {
    let actions = ctx.actions();

    Element::new("div").class("tabs").children(
        [DemoTab::Analysis, DemoTab::Partner, DemoTab::Performance]
            .into_iter()
            .map(|tab| {
                let class = if tab == active { "tab active" } else { "tab" };
                let actions = actions.clone();

                Element::new("button")
                    .class(class)
                    .attr("data-tab", tab.id())
                    .on(DomEvent::Click, move |_| actions.select_demo_tab(tab))
                    .text(tab.label())
            }),
    )
}

fn analysis_tab(ctx: &PageContext, demo: &DemoState) -> Element {
    let actions = ctx.actions();

    let results = if demo.analyzing {
        Some(
            Element::new("div")
                .class("card text-center mt-6")
                .child(Element::new("div").class("spinner mb-4"))
                .child(
                    Element::new("p")
                        .class("text-secondary")
                        .text("Analyzing your scene..."),
                ),
        )
    } else {
        // Nothing to show until the scheduled analysis lands.
        demo.analysis.as_ref().map(analysis_results)
    };

    Element::new("div")
        .class("card mt-6")
        .child(Element::new("h4").class("mb-4").text("Scene script"))
        .child(
            Element::new("select")
                .class("select mb-4")
                .on(DomEvent::Change, {
                    let actions = actions.clone();
                    move |detail| {
                        if let Some(value) = &detail.value {
                            actions.select_methodology(value);
                        }
                    }
                })
                .children(METHODOLOGIES.iter().map(|(id, name)| {
                    let option = Element::new("option").attr("value", *id).text(*name);

                    if *id == demo.methodology {
                        option.attr("selected", "selected")
                    } else {
                        option
                    }
                })),
        )
        .child(
            Element::new("textarea")
                .class("textarea mb-4")
                .attr("rows", "10")
                .attr("placeholder", "Paste your scene here...")
                .on(DomEvent::Change, {
                    let actions = actions.clone();
                    move |detail| {
                        if let Some(value) = &detail.value {
                            actions.set_demo_script(value);
                        }
                    }
                })
                .text(demo.script_text.clone()),
        )
        .child(
            Element::new("div")
                .class("flex gap-2")
                .child(
                    Element::new("button")
                        .class("btn btn-outline")
                        .on(DomEvent::Click, {
                            let actions = actions.clone();
                            move |_| actions.use_sample_script()
                        })
                        .text("Use sample scene"),
                )
                .child(
                    Element::new("button")
                        .class("btn btn-primary")
                        .on(DomEvent::Click, move |_| actions.analyze_script())
                        .text("\u{1f9e0} Analyze script"),
                ),
        )
        .child(results)
}

fn analysis_results(analysis: &SceneAnalysis) -> Element {
    Element::new("div")
        .class("fade-in mt-6")
        .child(
            Element::new("div")
                .class("card mb-4")
                .child(Element::new("h4").class("mb-4").text("Objectives"))
                .child(
                    Element::new("p")
                        .class("mb-2")
                        .text(format!("Main: {}", analysis.objectives.main)),
                )
                .child(
                    Element::new("p")
                        .class("mb-4")
                        .text(format!("Scene: {}", analysis.objectives.scene)),
                )
                .child(Element::new("ul").children(
                    analysis
                        .objectives
                        .beats
                        .iter()
                        .map(|beat| Element::new("li").text(beat.clone())),
                )),
        )
        .child(
            Element::new("div")
                .class("card mb-4")
                .child(Element::new("h4").class("mb-4").text("Obstacles"))
                .child(Element::new("h6").class("mb-2").text("Internal"))
                .child(Element::new("ul").class("mb-4").children(
                    analysis
                        .obstacles
                        .internal
                        .iter()
                        .map(|obstacle| Element::new("li").text(obstacle.clone())),
                ))
                .child(Element::new("h6").class("mb-2").text("External"))
                .child(Element::new("ul").children(
                    analysis
                        .obstacles
                        .external
                        .iter()
                        .map(|obstacle| Element::new("li").text(obstacle.clone())),
                )),
        )
        .child(
            Element::new("div")
                .class("card mb-4")
                .child(Element::new("h4").class("mb-4").text("Emotional arc"))
                .children(analysis.emotional_arc.iter().map(|beat| {
                    Element::new("div")
                        .class("mb-2")
                        .child(
                            Element::new("span")
                                .class("text-secondary")
                                .text(format!("Beat {}: {} ", beat.beat, beat.emotion)),
                        )
                        .child(
                            Element::new("div").class("progress-bar").child(
                                Element::new("div")
                                    .class("progress-fill")
                                    .style("width", format!("{}%", beat.intensity)),
                            ),
                        )
                })),
        )
        .child(
            Element::new("div")
                .class("card")
                .child(Element::new("h4").class("mb-4").text("Coaching tips"))
                .child(Element::new("ul").children(
                    analysis
                        .coaching_tips
                        .iter()
                        .map(|tip| Element::new("li").text(tip.clone())),
                )),
        )
}

fn partner_tab(ctx: &PageContext, demo: &DemoState) -> Element {
    let actions = ctx.actions();

    let transcript = if demo.messages.is_empty() {
        Element::new("p")
            .class("text-secondary text-center")
            .text("Start a rehearsal to run the scene with your AI partner.")
    } else {
        Element::new("div")
            .class("chat-window mb-4")
            .children(demo.messages.iter().map(|message| {
                let class = match message.role {
                    ChatRole::Actor => "chat-message actor",
                    ChatRole::Partner => "chat-message partner",
                };

                let bubble = Element::new("div").class(class);
                if message.typing {
                    bubble.child(Element::new("span").class("typing-indicator").text("..."))
                } else {
                    bubble.text(message.text.clone())
                }
            }))
    };

    let start = Element::new("button")
        .class("btn btn-primary")
        .on(DomEvent::Click, move |_| actions.start_rehearsal())
        .text(if demo.rehearsing {
            "Restart rehearsal"
        } else {
            "\u{1f4ac} Start rehearsal"
        });

    Element::new("div")
        .class("card mt-6")
        .child(Element::new("h4").class("mb-4").text("AI scene partner"))
        .child(transcript)
        .child(start)
}

fn performance_tab() -> Element {
    let categories = [
        ("Emotional authenticity", 82u8),
        ("Vocal delivery", 75),
        ("Physical presence", 80),
    ];

    Element::new("div")
        .class("card mt-6")
        .child(Element::new("h4").class("mb-4").text("Performance analysis"))
        .child(
            Element::new("div")
                .class("text-center mb-6")
                .child(Element::new("div").class("score-ring").text("78"))
                .child(Element::new("p").class("text-secondary").text("Overall score")),
        )
        .children(categories.into_iter().map(|(label, score)| {
            Element::new("div")
                .class("mb-4")
                .child(
                    Element::new("div")
                        .class("flex justify-between mb-2")
                        .child(Element::new("span").text(label))
                        .child(Element::new("span").text(score.to_string())),
                )
                .child(
                    Element::new("div").class("progress-bar").child(
                        Element::new("div")
                            .class("progress-fill")
                            .style("width", format!("{score}%")),
                    ),
                )
        }))
        .child(
            Element::new("p").class("text-secondary").text(
                "Record a take in the rehearsal studio to get feedback on your \
                 own performance.",
            ),
        )
}
