use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::use_toast;
use crate::router::Route;
use crate::services::api::TableQuery;
use crate::services::auth::AuthService;
use crate::types::{Pet, PetPayload, PetSize};
use crate::utils::validation::{non_empty, parse_optional_f64, parse_optional_i32};

#[derive(Properties, PartialEq)]
pub struct PetFormProps {
    /// `None` creates a new pet; `Some` edits an existing one.
    pub id: Option<String>,
}

#[derive(Clone, PartialEq, Default)]
struct FormState {
    name: String,
    species: String,
    breed: String,
    age: String,
    size: String,
    weight: String,
    personality: String,
    health_notes: String,
    allergies: String,
    vaccinated: bool,
    neutered: bool,
}

impl FormState {
    fn from_pet(pet: &Pet) -> FormState {
        FormState {
            name: pet.name.clone(),
            species: pet.species.clone(),
            breed: pet.breed.clone().unwrap_or_default(),
            age: pet.age.map(|age| age.to_string()).unwrap_or_default(),
            size: pet.size.map(|size| size.as_str().to_string()).unwrap_or_default(),
            weight: pet.weight.map(|weight| weight.to_string()).unwrap_or_default(),
            personality: pet.personality.clone().unwrap_or_default(),
            health_notes: pet.health_notes.clone().unwrap_or_default(),
            allergies: pet.allergies.clone().unwrap_or_default(),
            vaccinated: pet.vaccinated.unwrap_or(false),
            neutered: pet.neutered.unwrap_or(false),
        }
    }

    fn payload(&self, tutor_id: String) -> PetPayload {
        PetPayload {
            tutor_id,
            name: self.name.trim().to_string(),
            species: self.species.clone(),
            breed: non_empty(&self.breed),
            age: parse_optional_i32(&self.age),
            size: PetSize::from_str(&self.size),
            weight: parse_optional_f64(&self.weight),
            personality: non_empty(&self.personality),
            health_notes: non_empty(&self.health_notes),
            allergies: non_empty(&self.allergies),
            vaccinated: self.vaccinated,
            neutered: self.neutered,
        }
    }
}

#[function_component(PetForm)]
pub fn pet_form(props: &PetFormProps) -> Html {
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    let form = use_state(FormState::default);
    let saving = use_state(|| false);
    let editing = props.id.is_some();

    {
        let form = form.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                spawn_local(async move {
                    match TableQuery::new("pets").eq("id", &id).single::<Pet>().await {
                        Ok(pet) => form.set(FormState::from_pet(&pet)),
                        Err(error) => {
                            log::error!("pet load failed: {error}");
                            toast.error("Pet não encontrado");
                            navigator.push(&Route::Dashboard);
                        }
                    }
                });
            }
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

    let (name, on_name) = text_field(form.name.clone(), |f, v| f.name = v);
    let (breed, on_breed) = text_field(form.breed.clone(), |f, v| f.breed = v);
    let (age, on_age) = text_field(form.age.clone(), |f, v| f.age = v);
    let (weight, on_weight) = text_field(form.weight.clone(), |f, v| f.weight = v);
    let (allergies, on_allergies) = text_field(form.allergies.clone(), |f, v| f.allergies = v);

    let on_species = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*form).clone();
            next.species = value;
            form.set(next);
        })
    };

    let on_size = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*form).clone();
            next.size = value;
            form.set(next);
        })
    };

    let textarea = |value: String, setter: fn(&mut FormState, String)| {
        let form = form.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*form).clone();
            setter(&mut next, value);
            form.set(next);
        });
        (value, oninput)
    };

    let (personality, on_personality) =
        textarea(form.personality.clone(), |f, v| f.personality = v);
    let (health_notes, on_health) = textarea(form.health_notes.clone(), |f, v| f.health_notes = v);

    let checkbox = |checked: bool, setter: fn(&mut FormState, bool)| {
        let form = form.clone();
        let onchange = Callback::from(move |e: Event| {
            let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
            let mut next = (*form).clone();
            setter(&mut next, checked);
            form.set(next);
        });
        (checked, onchange)
    };

    let (vaccinated, on_vaccinated) = checkbox(form.vaccinated, |f, v| f.vaccinated = v);
    let (neutered, on_neutered) = checkbox(form.neutered, |f, v| f.neutered = v);

    let on_submit = {
        let form = form.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        let id = props.id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.name.trim().is_empty() || form.species.is_empty() {
                toast.error("Informe ao menos nome e espécie");
                return;
            }
            let Some(user_id) = AuthService::current_user_id() else {
                toast.error("Sessão expirada");
                return;
            };

            let payload = form.payload(user_id);
            let saving = saving.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            let id = id.clone();
            saving.set(true);

            spawn_local(async move {
                let result = match &id {
                    Some(id) => TableQuery::new("pets").eq("id", id).update(&payload).await,
                    None => TableQuery::new("pets").insert(&payload).await,
                };
                match result {
                    Ok(()) => {
                        toast.success(if id.is_some() {
                            "Pet atualizado!"
                        } else {
                            "Pet cadastrado!"
                        });
                        navigator.push(&Route::Dashboard);
                    }
                    Err(error) => {
                        log::error!("pet save failed: {error}");
                        toast.error_with_detail("Erro ao salvar o pet", error.to_string());
                        saving.set(false);
                    }
                }
            });
        })
    };

    let input_classes =
        "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400";

    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50 py-8">
            <div class="container mx-auto px-4 max-w-2xl">
                <Link<Route> to={Route::Dashboard} classes="inline-flex items-center gap-2 mb-6 text-gray-500 hover:text-gray-800">
                    {"← Voltar ao painel"}
                </Link<Route>>

                <div class="bg-white rounded-xl shadow-xl p-6">
                    <h1 class="text-2xl font-bold mb-6">
                        if editing { {"Editar pet"} } else { {"Cadastrar pet"} }
                    </h1>

                    <form onsubmit={on_submit} class="space-y-4">
                        <div class="grid md:grid-cols-2 gap-4">
                            <div>
                                <label for="pet-name" class="block text-sm font-medium mb-1">{"Nome *"}</label>
                                <input id="pet-name" type="text" class={input_classes}
                                    value={name} oninput={on_name} placeholder="Rex" />
                            </div>
                            <div>
                                <label for="pet-species" class="block text-sm font-medium mb-1">{"Espécie *"}</label>
                                <select id="pet-species" class={input_classes}
                                    value={form.species.clone()} onchange={on_species}>
                                    <option value="" selected={form.species.is_empty()}>{"Selecione"}</option>
                                    <option value="cachorro" selected={form.species == "cachorro"}>{"Cachorro"}</option>
                                    <option value="gato" selected={form.species == "gato"}>{"Gato"}</option>
                                    <option value="outro" selected={form.species == "outro"}>{"Outro"}</option>
                                </select>
                            </div>
                            <div>
                                <label for="pet-breed" class="block text-sm font-medium mb-1">{"Raça"}</label>
                                <input id="pet-breed" type="text" class={input_classes}
                                    value={breed} oninput={on_breed} placeholder="SRD" />
                            </div>
                            <div>
                                <label for="pet-age" class="block text-sm font-medium mb-1">{"Idade (anos)"}</label>
                                <input id="pet-age" type="number" min="0" class={input_classes}
                                    value={age} oninput={on_age} />
                            </div>
                            <div>
                                <label for="pet-size" class="block text-sm font-medium mb-1">{"Porte"}</label>
                                <select id="pet-size" class={input_classes}
                                    value={form.size.clone()} onchange={on_size}>
                                    <option value="" selected={form.size.is_empty()}>{"Selecione"}</option>
                                    { for PetSize::ALL.iter().map(|size| html! {
                                        <option value={size.as_str()} selected={form.size == size.as_str()}>
                                            {size.label()}
                                        </option>
                                    }) }
                                </select>
                            </div>
                            <div>
                                <label for="pet-weight" class="block text-sm font-medium mb-1">{"Peso (kg)"}</label>
                                <input id="pet-weight" type="number" min="0" step="0.1" class={input_classes}
                                    value={weight} oninput={on_weight} />
                            </div>
                        </div>

                        <div>
                            <label for="pet-personality" class="block text-sm font-medium mb-1">{"Personalidade"}</label>
                            <textarea id="pet-personality" rows="2" class={input_classes}
                                value={personality} oninput={on_personality}
                                placeholder="Brincalhão, dócil com crianças..." />
                        </div>
                        <div>
                            <label for="pet-health" class="block text-sm font-medium mb-1">{"Observações de saúde"}</label>
                            <textarea id="pet-health" rows="2" class={input_classes}
                                value={health_notes} oninput={on_health} />
                        </div>
                        <div>
                            <label for="pet-allergies" class="block text-sm font-medium mb-1">{"Alergias"}</label>
                            <input id="pet-allergies" type="text" class={input_classes}
                                value={allergies} oninput={on_allergies} />
                        </div>

                        <div class="flex gap-6">
                            <label class="flex items-center gap-2 text-sm">
                                <input type="checkbox" checked={vaccinated} onchange={on_vaccinated} />
                                {"Vacinado"}
                            </label>
                            <label class="flex items-center gap-2 text-sm">
                                <input type="checkbox" checked={neutered} onchange={on_neutered} />
                                {"Castrado"}
                            </label>
                        </div>

                        <button
                            type="submit"
                            disabled={*saving}
                            class="w-full bg-orange-500 hover:bg-orange-600 disabled:bg-orange-300 text-white font-bold py-2 px-4 rounded-md"
                        >
                            if *saving {
                                {"Salvando..."}
                            } else if editing {
                                {"Salvar alterações"}
                            } else {
                                {"Cadastrar pet"}
                            }
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
