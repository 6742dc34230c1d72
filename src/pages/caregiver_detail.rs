use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::use_toast;
use crate::router::Route;
use crate::services::api::{ApiError, TableQuery};
use crate::types::{Caregiver, Profile};

#[derive(Properties, PartialEq)]
pub struct CaregiverDetailProps {
    pub id: String,
}

async fn load_detail(id: &str) -> Result<(Caregiver, Option<Profile>), ApiError> {
    let caregiver: Caregiver = TableQuery::new("pet_caregivers").eq("id", id).single().await?;
    let profile: Option<Profile> = TableQuery::new("profiles")
        .eq("id", &caregiver.user_id)
        .maybe_single()
        .await?;
    Ok((caregiver, profile))
}

#[function_component(CaregiverDetail)]
pub fn caregiver_detail(props: &CaregiverDetailProps) -> Html {
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    let detail = use_state(|| None::<(Caregiver, Option<Profile>)>);
    let loading = use_state(|| true);

    {
        let detail = detail.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                match load_detail(&id).await {
                    Ok(loaded) => detail.set(Some(loaded)),
                    Err(ApiError::NotFound) => {
                        toast.error("Cuidador não encontrado");
                        navigator.push(&Route::Search);
                    }
                    Err(error) => {
                        log::error!("caregiver detail load failed: {error}");
                        toast.error_with_detail("Erro ao carregar o cuidador", error.to_string());
                        navigator.push(&Route::Search);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center text-gray-500">
                {"Carregando..."}
            </div>
        };
    }

    let Some((caregiver, profile)) = &*detail else {
        return Html::default();
    };

    let name = profile
        .as_ref()
        .map(|profile| profile.full_name.clone())
        .unwrap_or_else(|| "Cuidador".to_string());
    let rating = caregiver.rating.unwrap_or(0.0);
    let reviews = caregiver.total_reviews.unwrap_or(0);
    let booking_route = Route::BookingRequest {
        caregiver_id: caregiver.id.clone(),
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50 py-8">
            <div class="container mx-auto px-4 max-w-3xl">
                <Link<Route> to={Route::Search} classes="inline-flex items-center gap-2 mb-6 text-gray-500 hover:text-gray-800">
                    {"← Voltar à busca"}
                </Link<Route>>

                <div class="bg-white rounded-xl shadow-xl p-6">
                    <div class="flex items-start justify-between mb-4">
                        <div>
                            <h1 class="text-3xl font-bold text-gray-900 flex items-center gap-2">
                                {name}
                                if caregiver.verified.unwrap_or(false) {
                                    <span title="Cuidador verificado" class="text-blue-500 text-xl">{"✔"}</span>
                                }
                            </h1>
                            if let (Some(city), Some(state)) = (&caregiver.city, &caregiver.state) {
                                <p class="text-gray-500">{format!("📍 {city}, {state}")}</p>
                            }
                        </div>
                        <span class="text-lg text-yellow-600 font-semibold">
                            {format!("⭐ {rating:.1} ({reviews} avaliações)")}
                        </span>
                    </div>

                    if let Some(bio) = &caregiver.bio {
                        <p class="text-gray-700 mb-6">{bio}</p>
                    }

                    <div class="grid md:grid-cols-2 gap-4 mb-6 text-sm">
                        if let Some(years) = caregiver.experience_years {
                            <p>{format!("🏅 {years} anos de experiência")}</p>
                        }
                        if let Some(home_type) = &caregiver.home_type {
                            <p>{format!("🏠 Moradia: {home_type}")}</p>
                        }
                        if caregiver.has_yard.unwrap_or(false) {
                            <p>{"🌳 Tem quintal"}</p>
                        }
                        if let Some(max) = caregiver.max_pets_at_once {
                            <p>{format!("🐾 Até {max} pets por vez")}</p>
                        }
                    </div>

                    <div class="mb-6">
                        <h2 class="font-semibold mb-2">{"Serviços"}</h2>
                        <div class="flex flex-wrap gap-2">
                            { for caregiver.available_services.iter().flatten().map(|service| html! {
                                <span class="text-sm bg-orange-100 text-orange-700 px-3 py-1 rounded-full">
                                    {service.label()}
                                </span>
                            }) }
                        </div>
                    </div>

                    if caregiver.accepts_pet_sizes.as_ref().is_some_and(|sizes| !sizes.is_empty()) {
                        <div class="mb-6">
                            <h2 class="font-semibold mb-2">{"Portes aceitos"}</h2>
                            <div class="flex flex-wrap gap-2">
                                { for caregiver.accepts_pet_sizes.iter().flatten().map(|size| html! {
                                    <span class="text-sm bg-gray-100 text-gray-700 px-3 py-1 rounded-full">
                                        {size.label()}
                                    </span>
                                }) }
                            </div>
                        </div>
                    }

                    <div class="flex items-center justify-between border-t pt-4">
                        <div>
                            if let Some(price) = caregiver.price_per_day {
                                <p class="text-xl font-bold text-orange-600">{format!("R$ {price:.2}/diária")}</p>
                            }
                            if let Some(price) = caregiver.price_per_walk {
                                <p class="text-gray-500">{format!("R$ {price:.2}/passeio")}</p>
                            }
                        </div>
                        <Link<Route> to={booking_route} classes="bg-orange-500 hover:bg-orange-600 text-white font-bold py-3 px-6 rounded-lg">
                            {"Solicitar reserva"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
