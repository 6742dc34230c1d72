use std::collections::HashMap;

use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::use_toast;
use crate::router::Route;
use crate::services::api::{ApiError, Order, TableQuery};
use crate::services::auth::AuthService;
use crate::types::{Booking, BookingStatus, Caregiver, Pet, Profile};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Pets,
    TutorBookings,
    CaregiverBookings,
}

#[derive(Clone, PartialEq, Default)]
struct DashboardData {
    profile: Option<Profile>,
    pets: Vec<Pet>,
    tutor_bookings: Vec<Booking>,
    caregiver: Option<Caregiver>,
    caregiver_bookings: Vec<Booking>,
    pet_names: HashMap<String, String>,
}

#[derive(Deserialize)]
struct PetName {
    id: String,
    name: String,
}

async fn load_dashboard(user_id: &str) -> Result<DashboardData, ApiError> {
    let profile: Option<Profile> = TableQuery::new("profiles")
        .eq("id", user_id)
        .maybe_single()
        .await?;

    let pets: Vec<Pet> = TableQuery::new("pets")
        .eq("tutor_id", user_id)
        .order("name", Order::Ascending)
        .rows()
        .await?;

    let tutor_bookings: Vec<Booking> = TableQuery::new("bookings")
        .eq("tutor_id", user_id)
        .order("start_date", Order::Descending)
        .rows()
        .await?;

    let caregiver: Option<Caregiver> = TableQuery::new("pet_caregivers")
        .eq("user_id", user_id)
        .maybe_single()
        .await?;

    let caregiver_bookings: Vec<Booking> = match &caregiver {
        Some(caregiver) => {
            TableQuery::new("bookings")
                .eq("caregiver_id", &caregiver.id)
                .order("start_date", Order::Descending)
                .rows()
                .await?
        }
        None => Vec::new(),
    };

    // Name lookup for every pet referenced by a booking, own pets included.
    let mut pet_names: HashMap<String, String> = pets
        .iter()
        .map(|pet| (pet.id.clone(), pet.name.clone()))
        .collect();
    let missing: Vec<String> = tutor_bookings
        .iter()
        .chain(caregiver_bookings.iter())
        .map(|booking| booking.pet_id.clone())
        .filter(|id| !pet_names.contains_key(id))
        .collect();
    if !missing.is_empty() {
        let named: Vec<PetName> = TableQuery::new("pets")
            .select("id,name")
            .in_list("id", &missing)
            .rows()
            .await?;
        for pet in named {
            pet_names.insert(pet.id, pet.name);
        }
    }

    Ok(DashboardData {
        profile,
        pets,
        tutor_bookings,
        caregiver,
        caregiver_bookings,
        pet_names,
    })
}

fn status_badge(status: Option<BookingStatus>) -> Html {
    let (label, classes) = match status {
        Some(BookingStatus::Pendente) | None => {
            ("Pendente", "bg-yellow-100 text-yellow-800")
        }
        Some(BookingStatus::Confirmado) => ("Confirmado", "bg-blue-100 text-blue-800"),
        Some(BookingStatus::EmAndamento) => ("Em andamento", "bg-purple-100 text-purple-800"),
        Some(BookingStatus::Concluido) => ("Concluído", "bg-green-100 text-green-800"),
        Some(BookingStatus::Cancelado) => ("Cancelado", "bg-gray-100 text-gray-600"),
    };
    html! {
        <span class={format!("text-xs font-semibold px-2 py-1 rounded-full {classes}")}>
            {label}
        </span>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let navigator = use_navigator().unwrap();
    let toast = use_toast();

    let data = use_state(DashboardData::default);
    let loading = use_state(|| true);
    let tab = use_state(|| Tab::Pets);

    {
        let data = data.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let Some(user_id) = AuthService::current_user_id() else {
                    loading.set(false);
                    return;
                };
                match load_dashboard(&user_id).await {
                    Ok(loaded) => data.set(loaded),
                    Err(error) => {
                        log::error!("dashboard load failed: {error}");
                        toast.error_with_detail("Erro ao carregar o painel", error.to_string());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let navigator = navigator.clone();
            spawn_local(async move {
                AuthService::sign_out().await;
                navigator.push(&Route::Landing);
            });
        })
    };

    let booking_card = |booking: &Booking| {
        let pet_name = data
            .pet_names
            .get(&booking.pet_id)
            .cloned()
            .unwrap_or_else(|| "Pet".to_string());
        let chat_route = Route::Chat {
            booking_id: booking.id.clone(),
        };
        let review_route = Route::Review {
            booking_id: booking.id.clone(),
        };
        html! {
            <div key={booking.id.clone()} class="bg-white rounded-xl shadow p-4 flex items-center justify-between gap-4">
                <div>
                    <div class="flex items-center gap-2 mb-1">
                        <span class="font-semibold">{booking.service_type.label()}</span>
                        {status_badge(booking.status)}
                    </div>
                    <p class="text-sm text-gray-600">
                        {format!(
                            "{} · {} a {}",
                            pet_name,
                            booking.start_date.format("%d/%m/%Y"),
                            booking.end_date.format("%d/%m/%Y"),
                        )}
                    </p>
                    <p class="text-sm font-semibold text-orange-600">
                        {format!("R$ {:.2}", booking.total_price)}
                    </p>
                </div>
                <div class="flex flex-col items-end gap-2">
                    <Link<Route> to={chat_route} classes="text-sm text-blue-600 hover:underline">
                        {"💬 Chat"}
                    </Link<Route>>
                    if booking.status == Some(BookingStatus::Concluido) {
                        <Link<Route> to={review_route} classes="text-sm text-orange-600 hover:underline">
                            {"⭐ Avaliar"}
                        </Link<Route>>
                    }
                </div>
            </div>
        }
    };

    let tab_button = |target: Tab, label: String| {
        let tab = tab.clone();
        let active = *tab == target;
        let onclick = Callback::from(move |_| tab.set(target));
        let classes = if active {
            "px-4 py-2 rounded-lg bg-orange-500 text-white font-semibold"
        } else {
            "px-4 py-2 rounded-lg bg-white text-gray-600 hover:bg-orange-50"
        };
        html! { <button type="button" {onclick} class={classes}>{label}</button> }
    };

    if *loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center text-gray-500">
                {"Carregando..."}
            </div>
        };
    }

    let greeting = data
        .profile
        .as_ref()
        .map(|profile| profile.full_name.clone())
        .unwrap_or_else(|| "Bem-vindo".to_string());

    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50">
            <nav class="border-b bg-white/80">
                <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                    <Link<Route> to={Route::Landing} classes="flex items-center gap-2">
                        <span class="text-2xl">{"🐾"}</span>
                        <span class="text-xl font-bold text-gray-800">{"PetConnect"}</span>
                    </Link<Route>>
                    <div class="flex items-center gap-4">
                        <Link<Route> to={Route::Search} classes="text-gray-600 hover:text-gray-900">
                            {"Buscar Cuidadores"}
                        </Link<Route>>
                        <button onclick={on_logout} class="text-gray-600 hover:text-red-600">
                            {"Sair"}
                        </button>
                    </div>
                </div>
            </nav>

            <main class="container mx-auto px-4 py-8">
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900">{format!("Olá, {greeting}!")}</h1>
                        if let Some(profile) = &data.profile {
                            if let (Some(city), Some(state)) = (&profile.city, &profile.state) {
                                <p class="text-gray-500">{format!("{city}, {state}")}</p>
                            }
                        }
                    </div>
                    <div class="flex gap-3">
                        <Link<Route> to={Route::PetNew} classes="bg-orange-500 hover:bg-orange-600 text-white font-semibold py-2 px-4 rounded-lg">
                            {"+ Novo pet"}
                        </Link<Route>>
                        <Link<Route> to={Route::CaregiverProfile} classes="border-2 border-orange-500 text-orange-600 hover:bg-orange-50 font-semibold py-2 px-4 rounded-lg">
                            if data.caregiver.is_some() {
                                {"Meu perfil de cuidador"}
                            } else {
                                {"Quero ser cuidador"}
                            }
                        </Link<Route>>
                    </div>
                </div>

                <div class="flex gap-2 mb-6">
                    {tab_button(Tab::Pets, format!("Meus Pets ({})", data.pets.len()))}
                    {tab_button(
                        Tab::TutorBookings,
                        format!("Minhas Reservas ({})", data.tutor_bookings.len()),
                    )}
                    if data.caregiver.is_some() {
                        {tab_button(
                            Tab::CaregiverBookings,
                            format!("Reservas Recebidas ({})", data.caregiver_bookings.len()),
                        )}
                    }
                </div>

                {match *tab {
                    Tab::Pets => html! {
                        <div class="grid md:grid-cols-3 gap-4">
                            { for data.pets.iter().map(|pet| {
                                let edit_route = Route::PetEdit { id: pet.id.clone() };
                                html! {
                                    <div key={pet.id.clone()} class="bg-white rounded-xl shadow p-4">
                                        <div class="flex items-center justify-between mb-2">
                                            <h3 class="text-lg font-semibold">{&pet.name}</h3>
                                            <Link<Route> to={edit_route} classes="text-sm text-blue-600 hover:underline">
                                                {"Editar"}
                                            </Link<Route>>
                                        </div>
                                        <p class="text-sm text-gray-600">
                                            {&pet.species}
                                            if let Some(breed) = &pet.breed {
                                                {format!(" · {breed}")}
                                            }
                                        </p>
                                        if let Some(size) = pet.size {
                                            <p class="text-sm text-gray-500">{size.label()}</p>
                                        }
                                    </div>
                                }
                            }) }
                            if data.pets.is_empty() {
                                <p class="text-gray-500 col-span-3">
                                    {"Nenhum pet cadastrado ainda. Cadastre o primeiro!"}
                                </p>
                            }
                        </div>
                    },
                    Tab::TutorBookings => html! {
                        <div class="space-y-3">
                            { for data.tutor_bookings.iter().map(&booking_card) }
                            if data.tutor_bookings.is_empty() {
                                <p class="text-gray-500">{"Você ainda não fez nenhuma reserva."}</p>
                            }
                        </div>
                    },
                    Tab::CaregiverBookings => html! {
                        <div class="space-y-3">
                            { for data.caregiver_bookings.iter().map(&booking_card) }
                            if data.caregiver_bookings.is_empty() {
                                <p class="text-gray-500">{"Nenhuma reserva recebida ainda."}</p>
                            }
                        </div>
                    },
                }}
            </main>
        </div>
    }
}
