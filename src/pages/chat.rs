use std::collections::HashMap;
use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::use_toast;
use crate::router::Route;
use crate::services::api::{ApiError, Order, TableQuery};
use crate::services::auth::AuthService;
use crate::services::realtime::RealtimeChannel;
use crate::types::{Booking, Message, MessagePayload};

/// Conversation history. Realtime inserts and the initial load can overlap
/// (the socket may deliver a row the fetch already returned), so merging is
/// keyed by message id: a row that is already present is dropped.
#[derive(Clone, PartialEq, Default)]
struct MessageLog {
    messages: Vec<Message>,
}

enum LogAction {
    Load(Vec<Message>),
    Merge(Message),
}

impl Reducible for MessageLog {
    type Action = LogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LogAction::Load(messages) => Rc::new(MessageLog { messages }),
            LogAction::Merge(incoming) => {
                if self.messages.iter().any(|m| m.id == incoming.id) {
                    return self;
                }
                let mut messages = self.messages.clone();
                messages.push(incoming);
                Rc::new(MessageLog { messages })
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatProps {
    pub booking_id: String,
}

#[derive(Deserialize)]
struct SenderName {
    id: String,
    full_name: String,
}

async fn load_history(booking_id: &str) -> Result<(Booking, Vec<Message>), ApiError> {
    let booking: Booking = TableQuery::new("bookings").eq("id", booking_id).single().await?;
    let messages: Vec<Message> = TableQuery::new("messages")
        .eq("booking_id", booking_id)
        .order("created_at", Order::Ascending)
        .rows()
        .await?;
    Ok((booking, messages))
}

async fn load_sender_names(messages: &[Message]) -> Result<HashMap<String, String>, ApiError> {
    let mut ids: Vec<String> = messages.iter().map(|m| m.sender_id.clone()).collect();
    ids.sort();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let named: Vec<SenderName> = TableQuery::new("profiles")
        .select("id,full_name")
        .in_list("id", &ids)
        .rows()
        .await?;
    Ok(named.into_iter().map(|n| (n.id, n.full_name)).collect())
}

/// Flags every message from the other party as read.
async fn mark_read(booking_id: &str, user_id: &str) {
    let result = TableQuery::new("messages")
        .eq("booking_id", booking_id)
        .neq("sender_id", user_id)
        .update(&serde_json::json!({ "read": true }))
        .await;
    if let Err(error) = result {
        log::warn!("mark-as-read failed: {error}");
    }
}

#[function_component(Chat)]
pub fn chat(props: &ChatProps) -> Html {
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    let log = use_reducer(MessageLog::default);
    let booking = use_state(|| None::<Booking>);
    let names = use_state(HashMap::<String, String>::new);
    let loading = use_state(|| true);
    let draft_input = use_node_ref();
    let user_id = AuthService::current_user_id().unwrap_or_default();

    {
        let log = log.clone();
        let booking = booking.clone();
        let names = names.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        let user_id = user_id.clone();

        use_effect_with(props.booking_id.clone(), move |booking_id| {
            let booking_id = booking_id.clone();

            let channel = {
                let log = log.clone();
                let names = names.clone();
                let insert_booking_id = booking_id.clone();
                let user_id = user_id.clone();
                let on_insert = Callback::from(move |record: Value| {
                    let message = match serde_json::from_value::<Message>(record) {
                        Ok(message) => message,
                        Err(error) => {
                            log::warn!("unreadable realtime message: {error}");
                            return;
                        }
                    };
                    let log = log.clone();
                    let names = names.clone();
                    let booking_id = insert_booking_id.clone();
                    let user_id = user_id.clone();
                    spawn_local(async move {
                        // resolve the sender's name before the row shows up
                        if !names.contains_key(&message.sender_id) {
                            let lookup: Result<Option<SenderName>, _> =
                                TableQuery::new("profiles")
                                    .select("id,full_name")
                                    .eq("id", &message.sender_id)
                                    .maybe_single()
                                    .await;
                            if let Ok(Some(sender)) = lookup {
                                let mut next = (*names).clone();
                                next.insert(sender.id, sender.full_name);
                                names.set(next);
                            }
                        }
                        let from_other = message.sender_id != user_id;
                        log.dispatch(LogAction::Merge(message));
                        if from_other {
                            mark_read(&booking_id, &user_id).await;
                        }
                    });
                });
                RealtimeChannel::subscribe_inserts(
                    "messages",
                    &format!("booking_id=eq.{booking_id}"),
                    on_insert,
                )
            };
            if let Err(error) = &channel {
                log::error!("realtime subscription failed: {error}");
                toast.error("Não foi possível conectar ao chat em tempo real");
            }

            {
                let booking_id = booking_id.clone();
                spawn_local(async move {
                    match load_history(&booking_id).await {
                        Ok((loaded_booking, messages)) => {
                            match load_sender_names(&messages).await {
                                Ok(named) => names.set(named),
                                Err(error) => log::warn!("sender name lookup failed: {error}"),
                            }
                            booking.set(Some(loaded_booking));
                            log.dispatch(LogAction::Load(messages));
                            mark_read(&booking_id, &user_id).await;
                        }
                        Err(ApiError::NotFound) => {
                            toast.error("Reserva não encontrada");
                            navigator.push(&Route::Dashboard);
                        }
                        Err(error) => {
                            log::error!("chat history load failed: {error}");
                            toast.error_with_detail("Erro ao carregar o chat", error.to_string());
                        }
                    }
                    loading.set(false);
                });
            }

            move || {
                // leaving the screen tears the socket down
                drop(channel);
            }
        });
    }

    let on_send = {
        let draft_input = draft_input.clone();
        let toast = toast.clone();
        let booking_id = props.booking_id.clone();
        let user_id = user_id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = draft_input.cast::<HtmlInputElement>().unwrap();
            let text = input.value();
            if text.trim().is_empty() {
                return;
            }
            if user_id.is_empty() {
                toast.error("Sessão expirada");
                return;
            }

            let payload = MessagePayload {
                booking_id: booking_id.clone(),
                sender_id: user_id.clone(),
                message: text.trim().to_string(),
            };
            input.set_value("");

            let toast = toast.clone();
            spawn_local(async move {
                if let Err(error) = TableQuery::new("messages").insert(&payload).await {
                    log::error!("message send failed: {error}");
                    toast.error_with_detail("Erro ao enviar a mensagem", error.to_string());
                }
            });
        })
    };

    if *loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center text-gray-500">
                {"Carregando..."}
            </div>
        };
    }

    let header = booking
        .as_ref()
        .map(|booking| {
            format!(
                "{} · {} a {}",
                booking.service_type.label(),
                booking.start_date.format("%d/%m/%Y"),
                booking.end_date.format("%d/%m/%Y"),
            )
        })
        .unwrap_or_else(|| "Conversa".to_string());

    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50 flex flex-col">
            <nav class="border-b bg-white/80">
                <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                    <Link<Route> to={Route::Dashboard} classes="text-gray-500 hover:text-gray-800">
                        {"← Voltar"}
                    </Link<Route>>
                    <span class="font-semibold text-gray-800">{header}</span>
                    <span />
                </div>
            </nav>

            <main class="container mx-auto px-4 py-6 flex-1 flex flex-col max-w-2xl w-full">
                <div class="flex-1 space-y-3 overflow-y-auto pb-4">
                    { for log.messages.iter().map(|message| {
                        let mine = message.sender_id == user_id;
                        let bubble = if mine {
                            "ml-auto bg-orange-500 text-white"
                        } else {
                            "mr-auto bg-white text-gray-800"
                        };
                        let sender = names
                            .get(&message.sender_id)
                            .cloned()
                            .unwrap_or_else(|| "—".to_string());
                        html! {
                            <div key={message.id.clone()} class={format!("max-w-[75%] rounded-xl shadow px-4 py-2 {bubble}")}>
                                if !mine {
                                    <p class="text-xs font-semibold opacity-70">{sender}</p>
                                }
                                <p>{&message.message}</p>
                                if let Some(sent_at) = message.created_at {
                                    <p class="text-xs opacity-60 text-right">
                                        {sent_at.format("%d/%m %H:%M").to_string()}
                                    </p>
                                }
                            </div>
                        }
                    }) }
                    if log.messages.is_empty() {
                        <p class="text-gray-500 text-center py-12">
                            {"Nenhuma mensagem ainda. Diga olá!"}
                        </p>
                    }
                </div>

                <form onsubmit={on_send} class="flex gap-2">
                    <input
                        ref={draft_input.clone()}
                        type="text"
                        placeholder="Escreva uma mensagem..."
                        class="flex-1 px-4 py-2 border rounded-full focus:outline-none focus:ring-2 focus:ring-orange-400"
                    />
                    <button
                        type="submit"
                        class="bg-orange-500 hover:bg-orange-600 text-white font-bold py-2 px-6 rounded-full"
                    >
                        {"Enviar"}
                    </button>
                </form>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: &str, text: &str) -> Message {
        Message {
            id: id.to_string(),
            booking_id: "b-1".to_string(),
            sender_id: "u-1".to_string(),
            message: text.to_string(),
            read: Some(false),
            created_at: None,
        }
    }

    #[test]
    fn merge_appends_unknown_messages_in_arrival_order() {
        let log = Rc::new(MessageLog::default());
        let log = log.reduce(LogAction::Merge(message("m-1", "oi")));
        let log = log.reduce(LogAction::Merge(message("m-2", "tudo bem?")));
        let texts: Vec<&str> = log.messages.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["oi", "tudo bem?"]);
    }

    #[test]
    fn merge_drops_duplicate_ids() {
        let log = Rc::new(MessageLog::default());
        let log = log.reduce(LogAction::Load(vec![message("m-1", "oi")]));
        // the socket replays a row the initial fetch already returned
        let log = log.reduce(LogAction::Merge(message("m-1", "oi")));
        assert_eq!(log.messages.len(), 1);
    }

    #[test]
    fn load_replaces_the_whole_history() {
        let log = Rc::new(MessageLog::default());
        let log = log.reduce(LogAction::Merge(message("m-9", "stale")));
        let log = log.reduce(LogAction::Load(vec![
            message("m-1", "oi"),
            message("m-2", "olá"),
        ]));
        assert_eq!(log.messages.len(), 2);
        assert_eq!(log.messages[0].id, "m-1");
    }
}
