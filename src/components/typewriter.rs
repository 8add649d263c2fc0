use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const TYPE_TICK_MS: u32 = 20;
const PARAGRAPH_PAUSE_MS: u32 = 500;

const INTRO_PARAGRAPHS: [&str; 2] = [
    "DSO Overflow was born out of a desire, post DevSecOps London Gathering meet-up, to be able to have a relaxed conversation with our speakers about their area of expertise. A behind the scenes post talk interview, to ask all of the questions you didn't think to ask at the meet-up and more.",
    "In this show, you'll meet professionals, practitioners and theorists working in cyber security, software engineering and operations to talk about a number of CyberSecurity topics. We discuss how organisations factor security into their product delivery cycles without compromising the process.",
];

// Typing progress: 0 = typing the first paragraph, 1 = pause between
// paragraphs, 2 = typing the second, 3 = done.
#[function_component(TypewriterIntro)]
pub fn typewriter_intro() -> Html {
    let first_text = use_state(String::new);
    let second_text = use_state(String::new);
    let stage = use_state(|| 0usize);

    {
        let first_text = first_text.clone();
        let second_text = second_text.clone();
        let stage = stage.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                for (i, ch) in INTRO_PARAGRAPHS[0].char_indices() {
                    first_text.set(INTRO_PARAGRAPHS[0][..i + ch.len_utf8()].to_string());
                    TimeoutFuture::new(TYPE_TICK_MS).await;
                }
                stage.set(1);

                TimeoutFuture::new(PARAGRAPH_PAUSE_MS).await;
                stage.set(2);

                for (i, ch) in INTRO_PARAGRAPHS[1].char_indices() {
                    second_text.set(INTRO_PARAGRAPHS[1][..i + ch.len_utf8()].to_string());
                    TimeoutFuture::new(TYPE_TICK_MS).await;
                }
                stage.set(3);
            });

            || ()
        });
    }

    html! {
        <div class="typewriter-intro">
            <p id="description1" class="typewriter">
                <span class="typewriter-text">{ (*first_text).clone() }</span>
                {
                    if *stage == 0 {
                        html! { <span class="cursor">{ "|" }</span> }
                    } else {
                        html! {}
                    }
                }
            </p>
            {
                if *stage >= 2 {
                    html! {
                        <p id="description2" class="typewriter">
                            <span class="typewriter-text">{ (*second_text).clone() }</span>
                            {
                                if *stage == 2 {
                                    html! { <span class="cursor">{ "|" }</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
