use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::use_toast;
use crate::router::Route;
use crate::services::api::TableQuery;
use crate::services::auth::AuthService;
use crate::types::{Caregiver, CaregiverPayload, PetSize, ServiceType};
use crate::utils::validation::{non_empty, parse_optional_f64, parse_optional_i32};

#[derive(Clone, PartialEq, Default)]
struct FormState {
    bio: String,
    city: String,
    state: String,
    address: String,
    experience_years: String,
    home_type: String,
    has_yard: bool,
    max_pets_at_once: String,
    price_per_day: String,
    price_per_walk: String,
    services: Vec<ServiceType>,
    sizes: Vec<PetSize>,
}

impl FormState {
    fn from_caregiver(caregiver: &Caregiver) -> FormState {
        FormState {
            bio: caregiver.bio.clone().unwrap_or_default(),
            city: caregiver.city.clone().unwrap_or_default(),
            state: caregiver.state.clone().unwrap_or_default(),
            address: caregiver.address.clone().unwrap_or_default(),
            experience_years: caregiver
                .experience_years
                .map(|years| years.to_string())
                .unwrap_or_default(),
            home_type: caregiver.home_type.clone().unwrap_or_default(),
            has_yard: caregiver.has_yard.unwrap_or(false),
            max_pets_at_once: caregiver
                .max_pets_at_once
                .map(|count| count.to_string())
                .unwrap_or_default(),
            price_per_day: caregiver
                .price_per_day
                .map(|price| price.to_string())
                .unwrap_or_default(),
            price_per_walk: caregiver
                .price_per_walk
                .map(|price| price.to_string())
                .unwrap_or_default(),
            services: caregiver.available_services.clone().unwrap_or_default(),
            sizes: caregiver.accepts_pet_sizes.clone().unwrap_or_default(),
        }
    }

    fn payload(&self, user_id: String) -> CaregiverPayload {
        CaregiverPayload {
            user_id,
            bio: non_empty(&self.bio),
            city: non_empty(&self.city),
            state: non_empty(&self.state),
            address: non_empty(&self.address),
            experience_years: parse_optional_i32(&self.experience_years),
            home_type: non_empty(&self.home_type),
            has_yard: self.has_yard,
            max_pets_at_once: parse_optional_i32(&self.max_pets_at_once),
            price_per_day: parse_optional_f64(&self.price_per_day),
            price_per_walk: parse_optional_f64(&self.price_per_walk),
            available_services: Some(self.services.clone()),
            accepts_pet_sizes: Some(self.sizes.clone()),
        }
    }
}

#[function_component(CaregiverProfile)]
pub fn caregiver_profile() -> Html {
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    let form = use_state(FormState::default);
    // id of the existing caregiver row, once loaded; decides insert vs update
    let caregiver_id = use_state(|| None::<String>);
    let loading = use_state(|| true);
    let saving = use_state(|| false);

    {
        let form = form.clone();
        let caregiver_id = caregiver_id.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let Some(user_id) = AuthService::current_user_id() else {
                    loading.set(false);
                    return;
                };
                match TableQuery::new("pet_caregivers")
                    .eq("user_id", &user_id)
                    .maybe_single::<Caregiver>()
                    .await
                {
                    Ok(Some(caregiver)) => {
                        form.set(FormState::from_caregiver(&caregiver));
                        caregiver_id.set(Some(caregiver.id));
                    }
                    Ok(None) => {}
                    Err(error) => {
                        log::error!("caregiver profile load failed: {error}");
                        toast.error_with_detail("Erro ao carregar o perfil", error.to_string());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let text_field = |value: String, setter: fn(&mut FormState, String)| {
        let form = form.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            setter(&mut next, value);
            form.set(next);
        });
        (value, oninput)
    };

    let (city, on_city) = text_field(form.city.clone(), |f, v| f.city = v);
    let (state, on_state) = text_field(form.state.clone(), |f, v| f.state = v);
    let (address, on_address) = text_field(form.address.clone(), |f, v| f.address = v);
    let (experience, on_experience) =
        text_field(form.experience_years.clone(), |f, v| f.experience_years = v);
    let (max_pets, on_max_pets) =
        text_field(form.max_pets_at_once.clone(), |f, v| f.max_pets_at_once = v);
    let (price_day, on_price_day) =
        text_field(form.price_per_day.clone(), |f, v| f.price_per_day = v);
    let (price_walk, on_price_walk) =
        text_field(form.price_per_walk.clone(), |f, v| f.price_per_walk = v);

    let on_bio = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*form).clone();
            next.bio = value;
            form.set(next);
        })
    };

    let on_home_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*form).clone();
            next.home_type = value;
            form.set(next);
        })
    };

    let on_has_yard = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
            let mut next = (*form).clone();
            next.has_yard = checked;
            form.set(next);
        })
    };

    let service_toggle = |service: ServiceType| {
        let form = form.clone();
        let active = form.services.contains(&service);
        let onclick = Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            if next.services.contains(&service) {
                next.services.retain(|s| *s != service);
            } else {
                next.services.push(service);
            }
            form.set(next);
        });
        let classes = if active {
            "px-3 py-2 rounded-lg border-2 border-orange-500 bg-orange-50 text-orange-600 text-sm font-semibold"
        } else {
            "px-3 py-2 rounded-lg border-2 border-gray-200 text-sm hover:border-orange-300"
        };
        html! { <button type="button" {onclick} class={classes}>{service.label()}</button> }
    };

    let size_toggle = |size: PetSize| {
        let form = form.clone();
        let active = form.sizes.contains(&size);
        let onclick = Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            if next.sizes.contains(&size) {
                next.sizes.retain(|s| *s != size);
            } else {
                next.sizes.push(size);
            }
            form.set(next);
        });
        let classes = if active {
            "px-3 py-2 rounded-lg border-2 border-orange-500 bg-orange-50 text-orange-600 text-sm font-semibold"
        } else {
            "px-3 py-2 rounded-lg border-2 border-gray-200 text-sm hover:border-orange-300"
        };
        html! { <button type="button" {onclick} class={classes}>{size.label()}</button> }
    };

    let on_submit = {
        let form = form.clone();
        let caregiver_id = caregiver_id.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.city.trim().is_empty() || form.state.trim().is_empty() {
                toast.error("Informe cidade e estado");
                return;
            }
            if form.services.is_empty() {
                toast.error("Selecione ao menos um serviço");
                return;
            }
            let Some(user_id) = AuthService::current_user_id() else {
                toast.error("Sessão expirada");
                return;
            };

            let payload = form.payload(user_id);
            let existing = (*caregiver_id).clone();
            let saving = saving.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            saving.set(true);

            spawn_local(async move {
                let result = match &existing {
                    Some(id) => {
                        TableQuery::new("pet_caregivers")
                            .eq("id", id)
                            .update(&payload)
                            .await
                    }
                    None => TableQuery::new("pet_caregivers").insert(&payload).await,
                };
                match result {
                    Ok(()) => {
                        toast.success(if existing.is_some() {
                            "Perfil atualizado!"
                        } else {
                            "Perfil de cuidador criado!"
                        });
                        navigator.push(&Route::Dashboard);
                    }
                    Err(error) => {
                        log::error!("caregiver profile save failed: {error}");
                        toast.error_with_detail("Erro ao salvar o perfil", error.to_string());
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

    let input_classes =
        "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400";

    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50 py-8">
            <div class="container mx-auto px-4 max-w-2xl">
                <Link<Route> to={Route::Dashboard} classes="inline-flex items-center gap-2 mb-6 text-gray-500 hover:text-gray-800">
                    {"← Voltar ao painel"}
                </Link<Route>>

                <div class="bg-white rounded-xl shadow-xl p-6">
                    <h1 class="text-2xl font-bold mb-2">
                        if caregiver_id.is_some() {
                            {"Meu perfil de cuidador"}
                        } else {
                            {"Tornar-se cuidador"}
                        }
                    </h1>
                    <p class="text-gray-500 mb-6">
                        {"Descreva sua experiência e defina seus serviços e preços."}
                    </p>

                    <form onsubmit={on_submit} class="space-y-4">
                        <div>
                            <label for="cg-bio" class="block text-sm font-medium mb-1">{"Sobre você"}</label>
                            <textarea id="cg-bio" rows="3" class={input_classes}
                                value={form.bio.clone()} oninput={on_bio}
                                placeholder="Conte sua experiência com pets..." />
                        </div>

                        <div class="grid md:grid-cols-2 gap-4">
                            <div>
                                <label for="cg-city" class="block text-sm font-medium mb-1">{"Cidade *"}</label>
                                <input id="cg-city" type="text" class={input_classes}
                                    value={city} oninput={on_city} />
                            </div>
                            <div>
                                <label for="cg-state" class="block text-sm font-medium mb-1">{"Estado *"}</label>
                                <input id="cg-state" type="text" maxlength="2" class={input_classes}
                                    value={state} oninput={on_state} placeholder="SP" />
                            </div>
                        </div>

                        <div>
                            <label for="cg-address" class="block text-sm font-medium mb-1">{"Endereço"}</label>
                            <input id="cg-address" type="text" class={input_classes}
                                value={address} oninput={on_address} />
                        </div>

                        <div class="grid md:grid-cols-3 gap-4">
                            <div>
                                <label for="cg-experience" class="block text-sm font-medium mb-1">{"Anos de experiência"}</label>
                                <input id="cg-experience" type="number" min="0" class={input_classes}
                                    value={experience} oninput={on_experience} />
                            </div>
                            <div>
                                <label for="cg-home" class="block text-sm font-medium mb-1">{"Tipo de moradia"}</label>
                                <select id="cg-home" class={input_classes}
                                    value={form.home_type.clone()} onchange={on_home_type}>
                                    <option value="" selected={form.home_type.is_empty()}>{"Selecione"}</option>
                                    <option value="casa" selected={form.home_type == "casa"}>{"Casa"}</option>
                                    <option value="apartamento" selected={form.home_type == "apartamento"}>{"Apartamento"}</option>
                                </select>
                            </div>
                            <div>
                                <label for="cg-max-pets" class="block text-sm font-medium mb-1">{"Máx. pets por vez"}</label>
                                <input id="cg-max-pets" type="number" min="1" class={input_classes}
                                    value={max_pets} oninput={on_max_pets} />
                            </div>
                        </div>

                        <label class="flex items-center gap-2 text-sm">
                            <input type="checkbox" checked={form.has_yard} onchange={on_has_yard} />
                            {"Tenho quintal"}
                        </label>

                        <div class="grid md:grid-cols-2 gap-4">
                            <div>
                                <label for="cg-price-day" class="block text-sm font-medium mb-1">{"Preço por diária (R$)"}</label>
                                <input id="cg-price-day" type="number" min="0" step="0.01" class={input_classes}
                                    value={price_day} oninput={on_price_day} />
                            </div>
                            <div>
                                <label for="cg-price-walk" class="block text-sm font-medium mb-1">{"Preço por passeio (R$)"}</label>
                                <input id="cg-price-walk" type="number" min="0" step="0.01" class={input_classes}
                                    value={price_walk} oninput={on_price_walk} />
                            </div>
                        </div>

                        <div>
                            <p class="block text-sm font-medium mb-2">{"Serviços oferecidos *"}</p>
                            <div class="flex flex-wrap gap-2">
                                { for ServiceType::ALL.iter().map(|service| service_toggle(*service)) }
                            </div>
                        </div>

                        <div>
                            <p class="block text-sm font-medium mb-2">{"Portes aceitos"}</p>
                            <div class="flex flex-wrap gap-2">
                                { for PetSize::ALL.iter().map(|size| size_toggle(*size)) }
                            </div>
                        </div>

                        <button
                            type="submit"
                            disabled={*saving}
                            class="w-full bg-orange-500 hover:bg-orange-600 disabled:bg-orange-300 text-white font-bold py-2 px-4 rounded-md"
                        >
                            if *saving { {"Salvando..."} } else { {"Salvar perfil"} }
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
