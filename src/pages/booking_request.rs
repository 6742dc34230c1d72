use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::use_toast;
use crate::router::Route;
use crate::services::api::{ApiError, TableQuery};
use crate::services::auth::AuthService;
use crate::types::{BookingPayload, BookingStatus, Caregiver, Pet, ServiceType};
use crate::utils::pricing::booking_total;
use crate::utils::validation::non_empty;

#[derive(Properties, PartialEq)]
pub struct BookingRequestProps {
    pub caregiver_id: String,
}

#[derive(Clone, PartialEq, Default)]
struct FormState {
    pet_id: String,
    service: String,
    start_date: String,
    end_date: String,
    instructions: String,
}

impl FormState {
    fn service_type(&self) -> Option<ServiceType> {
        ServiceType::from_str(&self.service)
    }

    fn start(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()
    }

    fn end(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d").ok()
    }
}

async fn load_request_data(
    caregiver_id: &str,
    user_id: &str,
) -> Result<(Caregiver, Vec<Pet>), ApiError> {
    let caregiver: Caregiver = TableQuery::new("pet_caregivers")
        .eq("id", caregiver_id)
        .single()
        .await?;
    let pets: Vec<Pet> = TableQuery::new("pets").eq("tutor_id", user_id).rows().await?;
    Ok((caregiver, pets))
}

#[function_component(BookingRequest)]
pub fn booking_request(props: &BookingRequestProps) -> Html {
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    let caregiver = use_state(|| None::<Caregiver>);
    let pets = use_state(Vec::<Pet>::new);
    let form = use_state(FormState::default);
    let loading = use_state(|| true);
    let saving = use_state(|| false);

    {
        let caregiver = caregiver.clone();
        let pets = pets.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        use_effect_with(props.caregiver_id.clone(), move |caregiver_id| {
            let caregiver_id = caregiver_id.clone();
            spawn_local(async move {
                let Some(user_id) = AuthService::current_user_id() else {
                    loading.set(false);
                    return;
                };
                match load_request_data(&caregiver_id, &user_id).await {
                    Ok((loaded_caregiver, loaded_pets)) => {
                        if loaded_pets.is_empty() {
                            // cannot request a booking without a pet on file
                            toast.error("Cadastre um pet antes de solicitar uma reserva");
                            navigator.push(&Route::PetNew);
                            return;
                        }
                        caregiver.set(Some(loaded_caregiver));
                        pets.set(loaded_pets);
                    }
                    Err(ApiError::NotFound) => {
                        toast.error("Cuidador não encontrado");
                        navigator.push(&Route::Search);
                        return;
                    }
                    Err(error) => {
                        log::error!("booking request load failed: {error}");
                        toast.error_with_detail("Erro ao carregar", error.to_string());
                        navigator.push(&Route::Search);
                        return;
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_pet = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*form).clone();
            next.pet_id = value;
            form.set(next);
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*form).clone();
            next.service = value;
            form.set(next);
        })
    };

    let on_start = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            next.start_date = value;
            form.set(next);
        })
    };

    let on_end = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            next.end_date = value;
            form.set(next);
        })
    };

    let on_instructions = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*form).clone();
            next.instructions = value;
            form.set(next);
        })
    };

    let total = caregiver.as_ref().map_or(0.0, |caregiver| {
        booking_total(
            form.service_type(),
            form.start(),
            form.end(),
            caregiver.price_per_day,
            caregiver.price_per_walk,
        )
    });

    let on_submit = {
        let form = form.clone();
        let caregiver = caregiver.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(caregiver) = (*caregiver).clone() else {
                return;
            };
            let (Some(service), Some(start), Some(end)) =
                (form.service_type(), form.start(), form.end())
            else {
                toast.error("Preencha serviço e datas");
                return;
            };
            if form.pet_id.is_empty() {
                toast.error("Selecione um pet");
                return;
            }
            if end < start {
                toast.error("A data final deve ser igual ou posterior à inicial");
                return;
            }
            let Some(user_id) = AuthService::current_user_id() else {
                toast.error("Sessão expirada");
                return;
            };

            let payload = BookingPayload {
                tutor_id: user_id,
                caregiver_id: caregiver.id.clone(),
                pet_id: form.pet_id.clone(),
                service_type: service,
                start_date: start,
                end_date: end,
                special_instructions: non_empty(&form.instructions),
                total_price: booking_total(
                    Some(service),
                    Some(start),
                    Some(end),
                    caregiver.price_per_day,
                    caregiver.price_per_walk,
                ),
                status: BookingStatus::Pendente,
            };

            let saving = saving.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            saving.set(true);

            spawn_local(async move {
                match TableQuery::new("bookings").insert(&payload).await {
                    Ok(()) => {
                        toast.success("Reserva solicitada! Aguarde a confirmação do cuidador.");
                        navigator.push(&Route::Dashboard);
                    }
                    Err(error) => {
                        log::error!("booking insert failed: {error}");
                        toast.error_with_detail("Erro ao solicitar a reserva", error.to_string());
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

    let available_services: Vec<ServiceType> = caregiver
        .as_ref()
        .and_then(|caregiver| caregiver.available_services.clone())
        .unwrap_or_else(|| ServiceType::ALL.to_vec());
    let single_visit = form
        .service_type()
        .is_some_and(|service| service.is_single_visit());

    let input_classes =
        "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400";

    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50 py-8">
            <div class="container mx-auto px-4 max-w-2xl">
                <button
                    onclick={Callback::from(move |_| navigator.back())}
                    class="inline-flex items-center gap-2 mb-6 text-gray-500 hover:text-gray-800"
                >
                    {"← Voltar"}
                </button>

                <div class="bg-white rounded-xl shadow-xl p-6">
                    <h1 class="text-2xl font-bold mb-6">{"Solicitar reserva"}</h1>

                    <form onsubmit={on_submit} class="space-y-4">
                        <div>
                            <label for="booking-pet" class="block text-sm font-medium mb-1">{"Pet *"}</label>
                            <select id="booking-pet" class={input_classes}
                                value={form.pet_id.clone()} onchange={on_pet}>
                                <option value="" selected={form.pet_id.is_empty()}>{"Selecione"}</option>
                                { for pets.iter().map(|pet| html! {
                                    <option value={pet.id.clone()} selected={form.pet_id == pet.id}>
                                        {&pet.name}
                                    </option>
                                }) }
                            </select>
                        </div>

                        <div>
                            <label for="booking-service" class="block text-sm font-medium mb-1">{"Serviço *"}</label>
                            <select id="booking-service" class={input_classes}
                                value={form.service.clone()} onchange={on_service}>
                                <option value="" selected={form.service.is_empty()}>{"Selecione"}</option>
                                { for available_services.iter().map(|service| html! {
                                    <option value={service.as_str()} selected={form.service == service.as_str()}>
                                        {service.label()}
                                    </option>
                                }) }
                            </select>
                        </div>

                        <div class="grid md:grid-cols-2 gap-4">
                            <div>
                                <label for="booking-start" class="block text-sm font-medium mb-1">{"Data inicial *"}</label>
                                <input id="booking-start" type="date" class={input_classes}
                                    value={form.start_date.clone()} onchange={on_start} />
                            </div>
                            <div>
                                <label for="booking-end" class="block text-sm font-medium mb-1">{"Data final *"}</label>
                                <input id="booking-end" type="date" class={input_classes}
                                    value={form.end_date.clone()} onchange={on_end} />
                            </div>
                        </div>

                        <div>
                            <label for="booking-instructions" class="block text-sm font-medium mb-1">
                                {"Instruções especiais"}
                            </label>
                            <textarea id="booking-instructions" rows="3" class={input_classes}
                                value={form.instructions.clone()} oninput={on_instructions}
                                placeholder="Horários de alimentação, medicamentos..." />
                        </div>

                        <div class="bg-orange-50 rounded-lg p-4 flex items-center justify-between">
                            <div>
                                <p class="font-semibold">{"Total estimado"}</p>
                                if single_visit {
                                    <p class="text-xs text-gray-500">{"Passeio: valor único, independente das datas"}</p>
                                }
                            </div>
                            <p class="text-2xl font-bold text-orange-600">{format!("R$ {total:.2}")}</p>
                        </div>

                        <button
                            type="submit"
                            disabled={*saving}
                            class="w-full bg-orange-500 hover:bg-orange-600 disabled:bg-orange-300 text-white font-bold py-2 px-4 rounded-md"
                        >
                            if *saving { {"Enviando..."} } else { {"Solicitar reserva"} }
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
