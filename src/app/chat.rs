use chrono::Local;
use leptos::{either::Either, html, prelude::*};

use super::language::use_language;
use crate::{
    chatbot::{typing_delay, Conversation, Message},
    i18n::translate,
};

#[component]
fn ChatBubble(message: Message) -> impl IntoView {
    let time = message
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();
    let (row_class, bubble_class) = if message.is_user {
        (
            "flex justify-end",
            "max-w-[80%] px-4 py-2 rounded-2xl rounded-br-sm bg-cyan/20 text-foreground",
        )
    } else {
        (
            "flex justify-start",
            "max-w-[80%] px-4 py-2 rounded-2xl rounded-bl-sm bg-brightBlack/60 text-foreground",
        )
    };
    view! {
        <div class=row_class>
            <div class=bubble_class>
                <p class="text-sm whitespace-pre-wrap">{message.text}</p>
                <p class="text-[10px] text-muted mt-1 text-right">{time}</p>
            </div>
        </div>
    }
}

/// Floating assistant that answers questions about the portfolio owner.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let lang = use_language();
    let (is_open, set_is_open) = signal(false);
    let conversation = RwSignal::new(Conversation::new(lang.get_untracked()));
    let input_ref = NodeRef::<html::Input>::new();
    let pending = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    let handle_submit = move |text: String| {
        let Some(answer) = conversation
            .try_update(|c| c.respond(&text, lang.get_untracked()))
            .flatten()
        else {
            return;
        };
        let delay = typing_delay(fastrand::f64());
        log::debug!("chatbot replying in {delay:?}");

        let res = set_timeout_with_handle(
            move || {
                pending.try_update_value(Option::take);
                conversation.try_update(|c| c.push_reply(answer));
            },
            delay,
        );
        match res {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
                log::error!("failed to schedule chatbot reply: {err:?}");
                let fallback = translate(lang.get_untracked(), "chatbot.fallback");
                conversation.try_update(|c| c.push_reply(fallback));
            }
        }
    };
    let is_typing = move || conversation.with(|c| c.is_typing());

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end gap-4">
            <Show when=move || is_open.get()>
                <div class="w-80 sm:w-96 h-[28rem] flex flex-col rounded-2xl border border-muted/30 bg-background shadow-2xl overflow-hidden">
                    <div class="flex items-center gap-3 px-4 py-3 border-b border-muted/20 bg-brightBlack/40">
                        <div class="w-10 h-10 flex items-center justify-center rounded-full bg-cyan/20 text-cyan">
                            <i class="extra-bot" />
                        </div>
                        <div>
                            <p class="font-bold text-sm">{move || lang.t("chatbot.title")}</p>
                            <p class="text-xs text-green">{move || lang.t("chatbot.online")}</p>
                        </div>
                    </div>
                    // reversed so the scroll position stays pinned to the newest message
                    <div class="flex-1 flex flex-col-reverse overflow-y-auto p-4">
                        <div class="flex flex-col gap-3">
                            {move || {
                                conversation
                                    .with(|c| c.messages().to_vec())
                                    .into_iter()
                                    .map(|message| view! { <ChatBubble message /> })
                                    .collect_view()
                            }}
                            <Show when=is_typing>
                                <div class="flex justify-start">
                                    <div class="px-4 py-2 rounded-2xl rounded-bl-sm bg-brightBlack/60 text-sm text-muted italic">
                                        {move || lang.t("chatbot.typing")}
                                    </div>
                                </div>
                            </Show>
                        </div>
                    </div>
                    <form
                        class="flex items-center gap-2 p-3 border-t border-muted/20"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            let Some(el) = input_ref.get_untracked() else {
                                return;
                            };
                            handle_submit(el.value());
                            el.set_value("");
                        }
                    >
                        <input
                            node_ref=input_ref
                            type="text"
                            autocomplete="off"
                            placeholder=move || lang.t("chatbot.placeholder")
                            disabled=is_typing
                            class="flex-1 px-3 py-2 rounded-md bg-brightBlack/40 border border-muted/30 text-sm focus:outline-none focus:border-cyan/50"
                        />
                        <button
                            type="submit"
                            disabled=is_typing
                            aria-label=move || lang.t("chatbot.send")
                            class="w-10 h-10 flex items-center justify-center rounded-md bg-cyan/20 text-cyan hover:bg-cyan/30 disabled:opacity-50 transition-colors duration-200"
                        >
                            <i class="extra-send" />
                        </button>
                    </form>
                </div>
            </Show>
            <button
                type="button"
                class="w-14 h-14 flex items-center justify-center rounded-full bg-cyan text-background text-2xl shadow-lg hover:scale-105 transition-transform duration-200"
                aria-label=move || {
                    if is_open.get() { lang.t("chatbot.close") } else { lang.t("chatbot.open") }
                }
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                {move || {
                    if is_open.get() {
                        Either::Left(view! { <i class="extra-close" /> })
                    } else {
                        Either::Right(view! { <i class="extra-chat" /> })
                    }
                }}
            </button>
        </div>
    }
}
