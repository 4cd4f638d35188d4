use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::in_view::use_in_view;
use crate::Route;

const FAQS: [(&str, &str); 6] = [
    (
        "What is Nousu Collective?",
        "Nousu Collective is an outbound sales solutions company that helps businesses generate predictable pipeline through premium outbound campaigns. We act as your sales team, not just a vendor, delivering measurable growth you can rely on.",
    ),
    (
        "How does Nousu improve sales efficiency?",
        "We combine advanced AI technology with proven sales methodologies to identify high-quality prospects, craft personalized outreach campaigns, and book qualified meetings. Our approach eliminates the guesswork and delivers consistent results without requiring additional headcount.",
    ),
    (
        "Is Nousu suitable for all business sizes?",
        "Yes! We work with startups, scale-ups, SMEs, and enterprise companies. Our solutions are scalable and can be customized to fit your specific industry, target market, and growth stage. Whether you're looking to book your first 10 meetings or scale to hundreds, we have the right approach.",
    ),
    (
        "Does Nousu integrate with other tools?",
        "Absolutely! We integrate seamlessly with popular CRM systems like Salesforce, HubSpot, and Pipedrive, as well as communication tools like Slack and Zoom. Our goal is to fit into your existing workflow, not disrupt it.",
    ),
    (
        "How can I get started with Nousu?",
        "Getting started is easy! Join our waitlist to secure early access and exclusive launch pricing. Once onboard, we'll conduct a strategy session to understand your goals, design a custom outbound campaign, and start generating qualified meetings within weeks.",
    ),
    (
        "What kind of results can I expect?",
        "Our clients typically see qualified meetings booked within the first month, with many generating millions in pipeline value. Results vary by industry and target market, but we focus on delivering consistent, measurable outcomes that directly impact your revenue growth.",
    ),
];

/// Accordion rule: clicking the open item closes it, anything else opens.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if props.is_open { "−" } else { "+" } }</span>
            </button>
            {
                if props.is_open {
                    html! { <div class="faq-answer"><p>{ props.answer.clone() }</p></div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open_index = use_state(|| Some(0usize));
    let (section_ref, in_view) = use_in_view(0.3, true);

    html! {
        <section id="faq" ref={section_ref} class={classes!("faq-section", "reveal", in_view.then(|| "in-view"))}>
            <div class="section-heading">
                <span class="eyebrow">{"FAQ's"}</span>
                <h2>{"Answers to your common"}<br />{"questions"}</h2>
                <p>{"Everything you need to know about our outbound sales solutions"}</p>
            </div>
            <div class="faq-list">
                {
                    FAQS.iter().enumerate().map(|(index, (question, answer))| {
                        let on_toggle = {
                            let open_index = open_index.clone();
                            Callback::from(move |_| open_index.set(toggle_open(*open_index, index)))
                        };
                        html! {
                            <FaqItem
                                key={index}
                                question={*question}
                                answer={*answer}
                                is_open={*open_index == Some(index)}
                                on_toggle={on_toggle}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="faq-footer">
                <p>{"Still have questions? We're here to help."}</p>
                <Link<Route> to={Route::JoinWaitlist} classes="text-link">
                    {"Contact us →"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle_open(Some(0), 0), None);
    }

    #[test]
    fn clicking_other_item_switches() {
        assert_eq!(toggle_open(Some(0), 3), Some(3));
        assert_eq!(toggle_open(None, 2), Some(2));
    }
}
