use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ProtectedRoute;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/auth")]
    Auth,
    #[at("/auth/verify-email")]
    VerifyEmail,
    #[at("/dashboard")]
    Dashboard,
    #[at("/pets/new")]
    PetNew,
    #[at("/pets/:id/edit")]
    PetEdit { id: String },
    #[at("/caregiver/profile")]
    CaregiverProfile,
    #[at("/search")]
    Search,
    #[at("/caregivers/:id")]
    CaregiverDetail { id: String },
    #[at("/booking/request/:caregiver_id")]
    BookingRequest { caregiver_id: String },
    #[at("/chat/:booking_id")]
    Chat { booking_id: String },
    #[at("/review/:booking_id")]
    Review { booking_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn guarded(content: Html) -> Html {
    html! { <ProtectedRoute>{content}</ProtectedRoute> }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <crate::pages::Landing /> },
        Route::Auth => html! { <crate::pages::Auth /> },
        Route::VerifyEmail => html! { <crate::pages::VerifyEmail /> },
        Route::Dashboard => guarded(html! { <crate::pages::Dashboard /> }),
        Route::PetNew => guarded(html! { <crate::pages::PetForm id={None::<String>} /> }),
        Route::PetEdit { id } => guarded(html! { <crate::pages::PetForm id={Some(id)} /> }),
        Route::CaregiverProfile => guarded(html! { <crate::pages::CaregiverProfile /> }),
        Route::Search => html! { <crate::pages::SearchCaregivers /> },
        Route::CaregiverDetail { id } => html! { <crate::pages::CaregiverDetail {id} /> },
        Route::BookingRequest { caregiver_id } => {
            guarded(html! { <crate::pages::BookingRequest {caregiver_id} /> })
        }
        Route::Chat { booking_id } => guarded(html! { <crate::pages::Chat {booking_id} /> }),
        Route::Review { booking_id } => guarded(html! { <crate::pages::Review {booking_id} /> }),
        Route::NotFound => html! {
            <div class="min-h-screen flex flex-col items-center justify-center gap-4">
                <h1 class="text-4xl font-bold">{"404"}</h1>
                <p class="text-gray-500">{"Página não encontrada"}</p>
                <Link<Route> to={Route::Landing} classes="text-blue-600 hover:underline">
                    {"Voltar ao início"}
                </Link<Route>>
            </div>
        },
    }
}
