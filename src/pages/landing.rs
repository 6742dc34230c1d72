use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth_status;
use crate::router::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    let status = use_auth_status();

    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50">
            <nav class="border-b bg-white/80">
                <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">{"🐾"}</span>
                        <span class="text-xl font-bold text-gray-800">{"PetConnect"}</span>
                    </div>
                    <div class="flex items-center gap-4">
                        <Link<Route> to={Route::Search} classes="text-gray-600 hover:text-gray-900">
                            {"Buscar Cuidadores"}
                        </Link<Route>>
                        if status.is_authenticated && !status.loading {
                            <Link<Route> to={Route::Dashboard} classes="bg-orange-500 hover:bg-orange-600 text-white font-semibold py-2 px-4 rounded-lg">
                                {"Meu Painel"}
                            </Link<Route>>
                        } else {
                            <Link<Route> to={Route::Auth} classes="bg-orange-500 hover:bg-orange-600 text-white font-semibold py-2 px-4 rounded-lg">
                                {"Entrar"}
                            </Link<Route>>
                        }
                    </div>
                </div>
            </nav>

            <header class="container mx-auto px-4 py-20 text-center">
                <h1 class="text-5xl font-bold text-gray-900 mb-6">
                    {"Cuidado de confiança para o seu pet"}
                </h1>
                <p class="text-xl text-gray-600 mb-8 max-w-2xl mx-auto">
                    {"Encontre cuidadores verificados para hospedagem, passeios, visitas e creche. Converse, agende e avalie, tudo em um só lugar."}
                </p>
                <div class="flex justify-center gap-4">
                    <Link<Route> to={Route::Search} classes="bg-orange-500 hover:bg-orange-600 text-white font-bold py-3 px-8 rounded-lg text-lg">
                        {"Encontrar um cuidador"}
                    </Link<Route>>
                    <Link<Route> to={Route::Auth} classes="border-2 border-orange-500 text-orange-600 hover:bg-orange-50 font-bold py-3 px-8 rounded-lg text-lg">
                        {"Quero ser cuidador"}
                    </Link<Route>>
                </div>
            </header>

            <section class="container mx-auto px-4 py-16">
                <div class="grid md:grid-cols-4 gap-8">
                    <div class="bg-white p-6 rounded-xl shadow-md text-center">
                        <div class="text-4xl mb-3">{"🏠"}</div>
                        <h3 class="text-lg font-semibold mb-2">{"Hospedagem"}</h3>
                        <p class="text-gray-600 text-sm">{"Seu pet fica na casa do cuidador, com atenção em tempo integral"}</p>
                    </div>
                    <div class="bg-white p-6 rounded-xl shadow-md text-center">
                        <div class="text-4xl mb-3">{"🦮"}</div>
                        <h3 class="text-lg font-semibold mb-2">{"Passeio"}</h3>
                        <p class="text-gray-600 text-sm">{"Passeios avulsos com quem entende de cães"}</p>
                    </div>
                    <div class="bg-white p-6 rounded-xl shadow-md text-center">
                        <div class="text-4xl mb-3">{"👋"}</div>
                        <h3 class="text-lg font-semibold mb-2">{"Visita Diária"}</h3>
                        <p class="text-gray-600 text-sm">{"Alimentação, carinho e companhia na sua casa"}</p>
                    </div>
                    <div class="bg-white p-6 rounded-xl shadow-md text-center">
                        <div class="text-4xl mb-3">{"🎉"}</div>
                        <h3 class="text-lg font-semibold mb-2">{"Creche"}</h3>
                        <p class="text-gray-600 text-sm">{"Diversão e socialização durante o dia"}</p>
                    </div>
                </div>
            </section>

            <section class="bg-orange-500 py-16">
                <div class="container mx-auto px-4 text-center text-white">
                    <h2 class="text-3xl font-bold mb-4">{"Pronto para começar?"}</h2>
                    <p class="text-lg mb-8 opacity-90">
                        {"Cadastre seu pet e receba propostas de cuidadores verificados perto de você."}
                    </p>
                    <Link<Route> to={Route::Auth} classes="bg-white text-orange-600 font-bold py-3 px-8 rounded-lg text-lg hover:bg-orange-50">
                        {"Criar conta grátis"}
                    </Link<Route>>
                </div>
            </section>

            <footer class="bg-gray-900 text-gray-400 py-8">
                <div class="container mx-auto px-4 text-center text-sm">
                    <p>{"PetConnect — conectando tutores e cuidadores."}</p>
                </div>
            </footer>
        </div>
    }
}
