use leptos::{html, prelude::*, task::spawn_local};

use crate::chat::{self, ChatError, ChatTranscript, HttpChatApi};
use crate::config::ClientConfig;
use crate::page;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let transcript = RwSignal::new(ChatTranscript::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<html::Div>::new();

    // keep the newest message in view
    Effect::new(move |_| {
        transcript.track();
        if let Some(el) = messages_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let toggle = move |_| transcript.update(|t| t.toggle());

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        let Some(message) = transcript.try_update(|t| t.submit(&text)).flatten() else {
            return;
        };
        input.set(String::new());

        let Some(csrf_token) = page::csrf_token() else {
            leptos::logging::error!("AI chat unavailable: missing CSRF token");
            transcript.update(|t| {
                t.resolve(ChatError::Unreachable("missing CSRF token".to_string()).to_string())
            });
            return;
        };
        let api = HttpChatApi::new(&config.api_origin_or(&page::page_origin()), csrf_token);
        spawn_local(async move {
            let reply = chat::relay(&api, &message).await;
            transcript.update(|t| t.resolve(reply));
        });
    };

    view! {
        <div class="ai-chat">
            <button id="ai-chat-bubble" class="ai-chat-bubble" on:click=toggle>
                "💬"
            </button>
            <div id="ai-chat-window" class="ai-chat-window" class:visible=move || transcript.with(|t| t.is_open())>
                <div class="ai-chat-header">
                    <span>"HAUspital Assistant"</span>
                    <button id="close-chat-button" class="close-chat-button" on:click=toggle>
                        "×"
                    </button>
                </div>
                <div id="chat-messages" class="chat-messages" node_ref=messages_ref>
                    {move || transcript.with(|t| t.messages().to_vec()).into_iter().map(|message| {
                        view! {
                            <div class=message.sender.css_class()>
                                <div class="chat-bubble" class:typing=message.typing>
                                    {message.text}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
                <form id="chat-form" class="chat-form" on:submit=handle_submit>
                    <input
                        id="chat-input"
                        type="text"
                        placeholder="Ask about doctors, rooms or bookings..."
                        autocomplete="off"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button type="submit">"Send"</button>
                </form>
            </div>
        </div>
    }
}
