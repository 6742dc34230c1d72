use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::use_toast;
use crate::router::Route;
use crate::services::api::{self, ApiError, TableQuery};
use crate::services::auth::AuthService;
use crate::types::{Booking, Caregiver, Review as ReviewRow, ReviewPayload};
use crate::utils::validation::non_empty;

const MAX_COMMENT_CHARS: usize = 500;

#[derive(Properties, PartialEq)]
pub struct ReviewProps {
    pub booking_id: String,
}

/// The booking being reviewed plus the id of the party on the other side.
#[derive(Clone, PartialEq)]
struct ReviewTarget {
    booking: Booking,
    reviewed_id: String,
}

async fn load_target(booking_id: &str, user_id: &str) -> Result<ReviewTarget, ApiError> {
    // only finished bookings can be reviewed
    let booking: Booking = TableQuery::new("bookings")
        .eq("id", booking_id)
        .eq("status", "concluido")
        .single()
        .await?;

    let reviewed_id = if booking.tutor_id == user_id {
        let caregiver: Caregiver = TableQuery::new("pet_caregivers")
            .eq("id", &booking.caregiver_id)
            .single()
            .await?;
        caregiver.user_id
    } else {
        booking.tutor_id.clone()
    };

    Ok(ReviewTarget { booking, reviewed_id })
}

async fn already_reviewed(booking_id: &str, reviewer_id: &str) -> Result<bool, ApiError> {
    let existing: Option<ReviewRow> = TableQuery::new("reviews")
        .eq("booking_id", booking_id)
        .eq("reviewer_id", reviewer_id)
        .maybe_single()
        .await?;
    Ok(existing.is_some())
}

#[function_component(Review)]
pub fn review(props: &ReviewProps) -> Html {
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    let target = use_state(|| None::<ReviewTarget>);
    let rating = use_state(|| 5);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let comment_input = use_node_ref();

    {
        let target = target.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        use_effect_with(props.booking_id.clone(), move |booking_id| {
            let booking_id = booking_id.clone();
            spawn_local(async move {
                let Some(user_id) = AuthService::current_user_id() else {
                    loading.set(false);
                    return;
                };
                match already_reviewed(&booking_id, &user_id).await {
                    Ok(true) => {
                        toast.error("Você já avaliou esta reserva");
                        navigator.push(&Route::Dashboard);
                        return;
                    }
                    Ok(false) => {}
                    Err(error) => {
                        log::warn!("review pre-check failed: {error}");
                    }
                }
                match load_target(&booking_id, &user_id).await {
                    Ok(loaded) => target.set(Some(loaded)),
                    Err(ApiError::NotFound) => {
                        toast.error("Apenas reservas concluídas podem ser avaliadas");
                        navigator.push(&Route::Dashboard);
                    }
                    Err(error) => {
                        log::error!("review load failed: {error}");
                        toast.error_with_detail("Erro ao carregar a reserva", error.to_string());
                        navigator.push(&Route::Dashboard);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_submit = {
        let target = target.clone();
        let rating = rating.clone();
        let comment_input = comment_input.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        let booking_id = props.booking_id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(target) = (*target).clone() else {
                return;
            };
            let Some(user_id) = AuthService::current_user_id() else {
                toast.error("Sessão expirada");
                return;
            };
            let comment = comment_input.cast::<HtmlTextAreaElement>().unwrap().value();
            if comment.chars().count() > MAX_COMMENT_CHARS {
                toast.error("O comentário deve ter no máximo 500 caracteres");
                return;
            }

            let payload = ReviewPayload {
                booking_id: booking_id.clone(),
                reviewer_id: user_id,
                reviewed_id: target.reviewed_id.clone(),
                rating: *rating,
                comment: non_empty(&comment),
            };

            let saving = saving.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            saving.set(true);

            spawn_local(async move {
                match TableQuery::new("reviews").insert(&payload).await {
                    Ok(()) => {
                        // aggregate rating lives in the data layer
                        let recompute = api::rpc(
                            "recompute_caregiver_rating",
                            &serde_json::json!({ "p_reviewed_id": payload.reviewed_id }),
                        )
                        .await;
                        if let Err(error) = recompute {
                            log::warn!("rating recompute failed: {error}");
                        }
                        toast.success("Avaliação enviada. Obrigado!");
                        navigator.push(&Route::Dashboard);
                    }
                    Err(error) => {
                        log::error!("review insert failed: {error}");
                        toast.error_with_detail("Erro ao enviar a avaliação", error.to_string());
                        saving.set(false);
                    }
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

    let Some(loaded) = &*target else {
        return Html::default();
    };

    let star = |value: i32| {
        let rating = rating.clone();
        let filled = *rating >= value;
        let onclick = Callback::from(move |_: MouseEvent| rating.set(value));
        let classes = if filled {
            "text-3xl text-yellow-500"
        } else {
            "text-3xl text-gray-300 hover:text-yellow-300"
        };
        html! {
            <button type="button" {onclick} class={classes} aria-label={format!("{value} estrelas")}>
                {"★"}
            </button>
        }
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50 py-8">
            <div class="container mx-auto px-4 max-w-xl">
                <Link<Route> to={Route::Dashboard} classes="inline-flex items-center gap-2 mb-6 text-gray-500 hover:text-gray-800">
                    {"← Voltar ao painel"}
                </Link<Route>>

                <div class="bg-white rounded-xl shadow-xl p-6">
                    <h1 class="text-2xl font-bold mb-2">{"Avaliar reserva"}</h1>
                    <p class="text-gray-500 mb-6">
                        {format!(
                            "{} · {} a {}",
                            loaded.booking.service_type.label(),
                            loaded.booking.start_date.format("%d/%m/%Y"),
                            loaded.booking.end_date.format("%d/%m/%Y"),
                        )}
                    </p>

                    <form onsubmit={on_submit} class="space-y-4">
                        <div class="text-center">
                            <p class="text-sm font-medium mb-2">{"Sua nota"}</p>
                            <div class="flex justify-center gap-1">
                                { for (1..=5).map(star) }
                            </div>
                        </div>

                        <div>
                            <label for="review-comment" class="block text-sm font-medium mb-1">
                                {"Comentário (opcional)"}
                            </label>
                            <textarea
                                ref={comment_input.clone()}
                                id="review-comment"
                                rows="4"
                                maxlength="500"
                                placeholder="Conte como foi a experiência..."
                                class="w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400"
                            />
                        </div>

                        <button
                            type="submit"
                            disabled={*saving}
                            class="w-full bg-orange-500 hover:bg-orange-600 disabled:bg-orange-300 text-white font-bold py-2 px-4 rounded-md"
                        >
                            if *saving { {"Enviando..."} } else { {"Enviar avaliação"} }
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
