use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::use_toast;
use crate::router::Route;
use crate::services::api::{ApiError, Order, TableQuery};
use crate::types::{Caregiver, Profile, ServiceType};
use crate::utils::search::filter_by_price_ceiling;
use crate::utils::validation::parse_optional_f64;

#[derive(Clone, PartialEq, Default)]
struct Filters {
    city: String,
    state: String,
    service: String,
    min_rating: String,
    max_price: String,
}

async fn run_search(filters: &Filters) -> Result<Vec<Caregiver>, ApiError> {
    let mut query = TableQuery::new("pet_caregivers").eq("verified", "true");
    if !filters.city.trim().is_empty() {
        query = query.ilike("city", filters.city.trim());
    }
    if !filters.state.trim().is_empty() {
        query = query.ilike("state", filters.state.trim());
    }
    if !filters.service.is_empty() {
        query = query.contains("available_services", &filters.service);
    }
    if !filters.min_rating.is_empty() {
        query = query.gte("rating", &filters.min_rating);
    }
    let results: Vec<Caregiver> = query.order("rating", Order::Descending).rows().await?;

    // The price ceiling spans two columns, so it is applied client-side.
    Ok(match parse_optional_f64(&filters.max_price) {
        Some(ceiling) => filter_by_price_ceiling(results, ceiling),
        None => results,
    })
}

async fn load_names(caregivers: &[Caregiver]) -> Result<HashMap<String, Profile>, ApiError> {
    let ids: Vec<String> = caregivers.iter().map(|c| c.user_id.clone()).collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let profiles: Vec<Profile> = TableQuery::new("profiles")
        .select("id,full_name,avatar_url")
        .in_list("id", &ids)
        .rows()
        .await?;
    Ok(profiles
        .into_iter()
        .map(|profile| (profile.id.clone(), profile))
        .collect())
}

#[function_component(SearchCaregivers)]
pub fn search_caregivers() -> Html {
    let toast = use_toast();

    let filters = use_state(Filters::default);
    let results = use_state(Vec::<Caregiver>::new);
    let profiles = use_state(HashMap::<String, Profile>::new);
    let loading = use_state(|| false);
    let searched = use_state(|| false);

    let search = {
        let filters = filters.clone();
        let results = results.clone();
        let profiles = profiles.clone();
        let loading = loading.clone();
        let searched = searched.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let filters = (*filters).clone();
            let results = results.clone();
            let profiles = profiles.clone();
            let loading = loading.clone();
            let searched = searched.clone();
            let toast = toast.clone();
            loading.set(true);

            spawn_local(async move {
                match run_search(&filters).await {
                    Ok(found) => {
                        match load_names(&found).await {
                            Ok(named) => profiles.set(named),
                            Err(error) => {
                                // cards degrade to anonymous but still render
                                log::warn!("profile lookup failed: {error}");
                            }
                        }
                        results.set(found);
                        searched.set(true);
                    }
                    Err(error) => {
                        log::error!("caregiver search failed: {error}");
                        toast.error_with_detail("Erro na busca", error.to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_city = {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*filters).clone();
            next.city = value;
            filters.set(next);
        })
    };

    let on_state = {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*filters).clone();
            next.state = value;
            filters.set(next);
        })
    };

    let on_service = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*filters).clone();
            next.service = value;
            filters.set(next);
        })
    };

    let on_min_rating = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let mut next = (*filters).clone();
            next.min_rating = value;
            filters.set(next);
        })
    };

    let on_max_price = {
        let filters = filters.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*filters).clone();
            next.max_price = value;
            filters.set(next);
        })
    };

    let caregiver_card = |caregiver: &Caregiver| {
        let name = profiles
            .get(&caregiver.user_id)
            .map(|profile| profile.full_name.clone())
            .unwrap_or_else(|| "Cuidador".to_string());
        let detail_route = Route::CaregiverDetail {
            id: caregiver.id.clone(),
        };
        let rating = caregiver.rating.unwrap_or(0.0);
        let reviews = caregiver.total_reviews.unwrap_or(0);
        html! {
            <div key={caregiver.id.clone()} class="bg-white rounded-xl shadow p-5 flex flex-col gap-3">
                <div class="flex items-center justify-between">
                    <h3 class="text-lg font-semibold">{name}</h3>
                    <span class="text-sm text-yellow-600 font-semibold">
                        {format!("⭐ {rating:.1} ({reviews})")}
                    </span>
                </div>
                if let (Some(city), Some(state)) = (&caregiver.city, &caregiver.state) {
                    <p class="text-sm text-gray-500">{format!("📍 {city}, {state}")}</p>
                }
                if let Some(bio) = &caregiver.bio {
                    <p class="text-sm text-gray-600 line-clamp-2">{bio}</p>
                }
                <div class="flex flex-wrap gap-1">
                    { for caregiver.available_services.iter().flatten().map(|service| html! {
                        <span class="text-xs bg-orange-100 text-orange-700 px-2 py-1 rounded-full">
                            {service.label()}
                        </span>
                    }) }
                </div>
                <div class="flex items-center justify-between mt-auto pt-2">
                    <div class="text-sm">
                        if let Some(price) = caregiver.price_per_day {
                            <p class="font-semibold text-orange-600">{format!("R$ {price:.2}/diária")}</p>
                        }
                        if let Some(price) = caregiver.price_per_walk {
                            <p class="text-gray-500">{format!("R$ {price:.2}/passeio")}</p>
                        }
                    </div>
                    <Link<Route> to={detail_route} classes="bg-orange-500 hover:bg-orange-600 text-white text-sm font-semibold py-2 px-4 rounded-lg">
                        {"Ver perfil"}
                    </Link<Route>>
                </div>
            </div>
        }
    };

    let input_classes =
        "w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400";

    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50">
            <nav class="border-b bg-white/80">
                <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                    <Link<Route> to={Route::Landing} classes="flex items-center gap-2">
                        <span class="text-2xl">{"🐾"}</span>
                        <span class="text-xl font-bold text-gray-800">{"PetConnect"}</span>
                    </Link<Route>>
                    <Link<Route> to={Route::Dashboard} classes="text-gray-600 hover:text-gray-900">
                        {"Meu Painel"}
                    </Link<Route>>
                </div>
            </nav>

            <main class="container mx-auto px-4 py-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-6">{"Buscar Cuidadores"}</h1>

                <form onsubmit={search} class="bg-white rounded-xl shadow p-4 mb-8">
                    <div class="grid md:grid-cols-6 gap-4 items-end">
                        <div>
                            <label for="search-city" class="block text-sm font-medium mb-1">{"Cidade"}</label>
                            <input id="search-city" type="text" class={input_classes}
                                value={filters.city.clone()} oninput={on_city} placeholder="São Paulo" />
                        </div>
                        <div>
                            <label for="search-state" class="block text-sm font-medium mb-1">{"Estado"}</label>
                            <input id="search-state" type="text" maxlength="2" class={input_classes}
                                value={filters.state.clone()} oninput={on_state} placeholder="SP" />
                        </div>
                        <div>
                            <label for="search-service" class="block text-sm font-medium mb-1">{"Serviço"}</label>
                            <select id="search-service" class={input_classes}
                                value={filters.service.clone()} onchange={on_service}>
                                <option value="" selected={filters.service.is_empty()}>{"Todos"}</option>
                                { for ServiceType::ALL.iter().map(|service| html! {
                                    <option value={service.as_str()} selected={filters.service == service.as_str()}>
                                        {service.label()}
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div>
                            <label for="search-rating" class="block text-sm font-medium mb-1">{"Avaliação mínima"}</label>
                            <select id="search-rating" class={input_classes}
                                value={filters.min_rating.clone()} onchange={on_min_rating}>
                                <option value="" selected={filters.min_rating.is_empty()}>{"Qualquer"}</option>
                                <option value="3" selected={filters.min_rating == "3"}>{"3+"}</option>
                                <option value="4" selected={filters.min_rating == "4"}>{"4+"}</option>
                                <option value="4.5" selected={filters.min_rating == "4.5"}>{"4.5+"}</option>
                            </select>
                        </div>
                        <div>
                            <label for="search-price" class="block text-sm font-medium mb-1">{"Preço máximo (R$)"}</label>
                            <input id="search-price" type="number" min="0" class={input_classes}
                                value={filters.max_price.clone()} oninput={on_max_price} />
                        </div>
                        <button
                            type="submit"
                            disabled={*loading}
                            class="bg-orange-500 hover:bg-orange-600 disabled:bg-orange-300 text-white font-bold py-2 px-4 rounded-md"
                        >
                            if *loading { {"Buscando..."} } else { {"Buscar"} }
                        </button>
                    </div>
                </form>

                <div class="grid md:grid-cols-3 gap-4">
                    { for results.iter().map(&caregiver_card) }
                </div>
                if *searched && results.is_empty() && !*loading {
                    <p class="text-gray-500 text-center py-12">
                        {"Nenhum cuidador encontrado com esses filtros."}
                    </p>
                }
            </main>
        </div>
    }
}
