//! Application components.

use std::time::Duration;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use ministore_commerce::cart::CartItem;
use ministore_commerce::catalog::Product;
use ministore_commerce::{Event, StoreConfig, Storefront, ViewMode};
use ministore_data::{CatalogLoader, FetchClient, HttpCatalog};
use wasm_bindgen::JsCast;

// ============================================================================
// State plumbing
// ============================================================================

/// Session state shared through context.
#[derive(Clone, Copy)]
struct Store(RwSignal<Storefront>);

impl Store {
    fn dispatch(&self, event: Event) {
        self.0.update(|state| state.dispatch(event));
    }

    fn with<R>(&self, f: impl FnOnce(&Storefront) -> R) -> R {
        self.0.with(f)
    }
}

fn use_store() -> Store {
    expect_context::<Store>()
}

fn store_config() -> StoreConfig {
    StoreConfig::default().with_page_size_override(option_env!("MINISTORE_PRODUCTS_PER_PAGE"))
}

/// Page origin, so the catalog path resolves to an absolute URL.
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = store_config();
    let store = Store(RwSignal::new(Storefront::new(&config)));
    provide_context(store);
    provide_context(config.clone());

    load_catalog(store, &config);

    view! {
        <Title text="Mini Sklep"/>
        <Meta name="description" content="Mini Sklep"/>

        <div class="flex min-h-screen flex-col">
            <Header/>
            <main class="flex-1">
                <div class="mx-auto max-w-6xl px-4 py-10">
                    <Products/>
                </div>
            </main>
            <Footer/>
            <ToastView/>
        </div>
    }
}

/// Fetch the catalog once; drop the result if the app unmounts first.
fn load_catalog(store: Store, config: &StoreConfig) {
    let mut client = FetchClient::new();
    if let Some(origin) = page_origin() {
        client = client.with_base_url(origin);
    }

    let loader = CatalogLoader::new(HttpCatalog::from_config(client, config));
    let guard = loader.guard();
    on_cleanup({
        let guard = guard.clone();
        move || guard.teardown()
    });

    spawn_local(async move {
        if let Some(state) = loader.load().await {
            store.dispatch(Event::CatalogResolved(state));
        }
    });
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="border-b border-slate-200 bg-white shadow-sm">
            <div class="mx-auto max-w-6xl px-4 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <div class="flex h-12 w-12 items-center justify-center rounded-xl bg-slate-900 text-white">
                            "🛒"
                        </div>
                        <div>
                            <p class="text-sm uppercase tracking-wide text-slate-500">"Mini sklep"</p>
                            <h1 class="text-xl font-semibold text-slate-900 sm:text-2xl">"Mini Sklep"</h1>
                        </div>
                    </div>
                    <CartMenu/>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200 bg-white py-6">
            <div class="mx-auto max-w-6xl px-4">
                <p class="text-center text-sm text-slate-600">
                    "Copyrights Maxsoft. All rights reserved."
                </p>
            </div>
        </footer>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

/// Cart button with count badge and the dropdown panel.
#[component]
fn CartMenu() -> impl IntoView {
    let store = use_store();
    let menu_ref = NodeRef::<html::Div>::new();

    let is_open = Memo::new(move |_| store.with(|s| s.is_cart_open()));
    let count = Memo::new(move |_| store.with(|s| s.cart_count()));

    // Close on any press outside the menu.
    let outside = window_event_listener(ev::mousedown, move |event| {
        if !is_open.get_untracked() {
            return;
        }
        let Some(menu) = menu_ref.get_untracked() else {
            return;
        };
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !menu.contains(target.as_ref()) {
            store.dispatch(Event::CloseCart);
        }
    });
    on_cleanup(move || outside.remove());

    view! {
        <div node_ref=menu_ref class="relative">
            <button
                class="relative inline-flex items-center gap-2 rounded-lg bg-slate-900 px-4 py-2 text-sm font-semibold text-white shadow-sm transition hover:bg-slate-800"
                on:click=move |_| store.dispatch(Event::ToggleCart)
                aria-expanded=move || is_open.get().to_string()
                aria-label="Otwórz koszyk"
            >
                <span class="text-lg">"🛍️"</span>
                <span>"Koszyk"</span>
                <Show when=move || { count.get() > 0 }>
                    <span class="flex h-6 min-w-6 items-center justify-center rounded-full bg-white px-2 text-xs font-bold text-slate-900">
                        {move || count.get().to_string()}
                    </span>
                </Show>
            </button>

            <Show when=move || is_open.get()>
                <div class="absolute right-0 z-50 mt-2 w-96 max-w-[calc(100vw-2rem)]">
                    <CartPanel/>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn CartPanel() -> impl IntoView {
    let store = use_store();

    let items = Memo::new(move |_| store.with(|s| s.cart().items().to_vec()));
    let count = move || store.with(|s| s.cart_count());
    let total = move || store.with(|s| s.cart_total().display());
    let is_empty = move || items.with(|items| items.is_empty());

    view! {
        <aside class="rounded-2xl border border-slate-200 bg-white p-6 shadow-lg">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-slate-900">
                    "Twój koszyk (" {move || count().to_string()} ")"
                </h2>
                <button
                    class="text-sm text-slate-600 underline hover:text-slate-900"
                    on:click=move |_| store.dispatch(Event::ClearCart)
                    disabled=is_empty
                >
                    "Wyczyść"
                </button>
            </div>

            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="mt-4 text-slate-600">"Koszyk jest pusty."</p> }
            >
                <div class="mt-4 space-y-4">
                    <For
                        each=move || items.get()
                        key=|item| (item.product.id.clone(), item.quantity)
                        children=move |item| view! { <CartRow item=item/> }
                    />

                    <div class="flex items-center justify-between rounded-xl bg-slate-900 px-4 py-3 text-white">
                        <span class="text-sm uppercase tracking-wide">"Razem"</span>
                        <span class="text-lg font-bold">{total}</span>
                    </div>
                </div>
            </Show>
        </aside>
    }
}

#[component]
fn CartRow(item: CartItem) -> impl IntoView {
    let store = use_store();
    let subtotal = item.subtotal().display();
    let CartItem { product, quantity } = item;
    let (dec_id, inc_id, remove_id) = (product.id.clone(), product.id.clone(), product.id.clone());

    view! {
        <div class="flex flex-col gap-3 rounded-xl border border-slate-200 p-4 sm:flex-row sm:items-center sm:justify-between">
            <div class="flex items-center gap-3">
                <img src=product.image.clone() alt=product.title.clone() class="h-16 w-16 rounded-lg object-cover"/>
                <div>
                    <p class="font-semibold text-slate-900">{product.title.clone()}</p>
                    <p class="text-sm text-slate-600">{subtotal}</p>
                </div>
            </div>

            <div class="flex flex-wrap items-center gap-2">
                <div class="inline-flex items-center rounded-lg border border-slate-200">
                    <button
                        class="px-3 py-1 text-lg font-semibold text-slate-700 hover:bg-slate-100"
                        on:click=move |_| store.dispatch(Event::AdjustQuantity { product_id: dec_id.clone(), delta: -1 })
                        aria-label="Zmniejsz ilość"
                    >
                        "−"
                    </button>
                    <span class="min-w-[48px] text-center text-sm font-semibold text-slate-900">
                        {quantity.to_string()}
                    </span>
                    <button
                        class="px-3 py-1 text-lg font-semibold text-slate-700 hover:bg-slate-100"
                        on:click=move |_| store.dispatch(Event::AdjustQuantity { product_id: inc_id.clone(), delta: 1 })
                        aria-label="Zwiększ ilość"
                    >
                        "+"
                    </button>
                </div>
                <button
                    class="text-sm font-semibold text-red-600 hover:text-red-700"
                    on:click=move |_| store.dispatch(Event::RemoveFromCart(remove_id.clone()))
                >
                    "Usuń"
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn Products() -> impl IntoView {
    let store = use_store();

    let total = move || store.with(|s| s.catalog().product_count());
    let is_loading = move || store.with(|s| s.is_loading());
    let error = move || store.with(|s| s.error().map(str::to_string));
    let visible = Memo::new(move |_| store.with(|s| s.visible_products().to_vec()));
    let is_grid = move || store.with(|s| s.view_mode().is_grid());
    let settled = move || !is_loading() && error().is_none();

    view! {
        <div class="flex flex-col gap-4 border-b border-slate-200 pb-4 sm:flex-row sm:items-center sm:justify-between">
            <h2 class="text-2xl font-semibold text-slate-900 sm:text-3xl">
                "Produkty ("
                {move || match total() {
                    0 => "-".to_string(),
                    n => n.to_string(),
                }}
                ")"
            </h2>
            <ViewToggle/>
        </div>

        <section class="mt-8">
            <Show when=is_loading>
                <p class="text-slate-600">"Ładowanie produktów..."</p>
            </Show>

            {move || error().map(|message| view! {
                <p class="text-red-600">
                    "Ups! " {message} ". Odśwież stronę aby spróbować ponownie."
                </p>
            })}

            <Show when=move || settled() && visible.with(|v| v.is_empty())>
                <p class="text-slate-600">"Brak produktów do wyświetlenia."</p>
            </Show>

            <Show when=move || settled() && visible.with(|v| !v.is_empty())>
                <div class=move || if is_grid() {
                    "grid gap-6 sm:grid-cols-2 lg:grid-cols-3"
                } else {
                    "flex flex-col gap-4"
                }>
                    <For
                        each=move || visible.get()
                        key=|product| product.id.clone()
                        children=move |product| view! { <ProductCard product=product/> }
                    />
                </div>
            </Show>
        </section>

        <Show when=move || settled() && total() > 0>
            <PaginationNav/>
        </Show>
    }
}

#[component]
fn ViewToggle() -> impl IntoView {
    let store = use_store();
    let is_grid = move || store.with(|s| s.view_mode().is_grid());

    let button_class = |active: bool| {
        if active {
            "px-4 py-2 text-sm font-medium transition bg-slate-900 text-white"
        } else {
            "px-4 py-2 text-sm font-medium transition bg-white text-slate-700 hover:bg-slate-50"
        }
    };

    view! {
        <div class="flex flex-wrap items-center gap-3">
            <div class="inline-flex overflow-hidden rounded-lg border border-slate-200 shadow-sm">
                <button
                    class=move || button_class(is_grid())
                    on:click=move |_| store.dispatch(Event::SetViewMode(ViewMode::Grid))
                    aria-pressed=move || is_grid().to_string()
                >
                    "Siatka"
                </button>
                <button
                    class=move || button_class(!is_grid())
                    on:click=move |_| store.dispatch(Event::SetViewMode(ViewMode::List))
                    aria-pressed=move || (!is_grid()).to_string()
                >
                    "Lista"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let store = use_store();
    let is_grid = move || store.with(|s| s.view_mode().is_grid());
    let price = product.price_display();
    let (title, description, image) = (
        product.title.clone(),
        product.description.clone(),
        product.image.clone(),
    );

    view! {
        <article class=move || if is_grid() {
            "overflow-hidden rounded-xl border border-slate-200 bg-white shadow-sm transition hover:-translate-y-0.5 hover:shadow-md"
        } else {
            "overflow-hidden rounded-xl border border-slate-200 bg-white shadow-sm transition hover:-translate-y-0.5 hover:shadow-md flex gap-4 sm:gap-6"
        }>
            <img
                src=image
                alt=title.clone()
                class=move || if is_grid() {
                    "h-40 w-full object-cover"
                } else {
                    "h-32 w-32 flex-none object-cover sm:h-40 sm:w-40"
                }
                loading="lazy"
            />

            <div class="flex h-full flex-1 flex-col gap-3 p-4">
                <div class="flex items-start justify-between gap-2">
                    <div>
                        <h2 class="text-lg font-semibold text-slate-900">{title}</h2>
                        <p class="mt-1 text-sm text-slate-600">{description}</p>
                    </div>
                    <span class="rounded-full bg-slate-900 px-3 py-1 text-sm font-semibold text-white min-w-24 text-center sm:min-w-24">
                        <strong>{price}</strong>
                    </span>
                </div>

                <button
                    class="inline-flex w-fit items-center justify-center gap-2 rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white shadow-sm transition hover:bg-emerald-600 focus:outline-none focus:ring-2 focus:ring-emerald-300"
                    on:click=move |_| store.dispatch(Event::AddToCart(product.clone()))
                >
                    "➕ Dodaj"
                </button>
            </div>
        </article>
    }
}

#[component]
fn PaginationNav() -> impl IntoView {
    let store = use_store();
    let pagination = Memo::new(move |_| store.with(|s| s.pagination()));
    let go = move |page: i64| store.dispatch(Event::ChangePage(page));
    let current = move || pagination.with(|p| p.page as i64);

    view! {
        <nav class="mt-10 flex flex-wrap items-center justify-center gap-3">
            <button
                class="rounded-lg border border-slate-200 px-3 py-2 text-sm text-slate-700 transition hover:bg-slate-100 disabled:cursor-not-allowed disabled:opacity-50"
                on:click=move |_| go(current() - 1)
                disabled=move || pagination.with(|p| !p.has_prev)
            >
                "Poprzednia"
            </button>

            <For
                each=move || pagination.with(|p| p.page_numbers())
                key=|n| *n
                children=move |n| {
                    let is_active = move || pagination.with(|p| p.page == n);
                    view! {
                        <button
                            class=move || if is_active() {
                                "h-10 w-10 rounded-lg border text-sm font-semibold transition border-slate-900 bg-slate-900 text-white"
                            } else {
                                "h-10 w-10 rounded-lg border text-sm font-semibold transition border-slate-200 bg-white text-slate-700 hover:bg-slate-100"
                            }
                            on:click=move |_| go(n as i64)
                            aria-current=move || is_active().then_some("page")
                        >
                            {n.to_string()}
                        </button>
                    }
                }
            />

            <button
                class="rounded-lg border border-slate-200 px-3 py-2 text-sm text-slate-700 transition hover:bg-slate-100 disabled:cursor-not-allowed disabled:opacity-50"
                on:click=move |_| go(current() + 1)
                disabled=move || pagination.with(|p| !p.has_next)
            >
                "Następna"
            </button>
        </nav>
    }
}

// ============================================================================
// Toast
// ============================================================================

/// Current toast, with a close button and an auto-dismiss timer.
#[component]
fn ToastView() -> impl IntoView {
    let store = use_store();
    let config = expect_context::<StoreConfig>();
    let timeout = Duration::from_millis(u64::from(config.toast_timeout_ms));

    let toast = Memo::new(move |_| store.with(|s| s.toast().cloned()));

    // Every new toast gets its own timer; expiring by id leaves newer toasts alone.
    Effect::new(move |_| {
        if let Some(id) = toast.with(|t| t.as_ref().map(|t| t.id)) {
            set_timeout(move || store.dispatch(Event::ExpireToast(id)), timeout);
        }
    });

    move || {
        toast.get().map(|toast| {
            view! {
                <div class="fixed bottom-6 right-6 rounded-lg bg-slate-900 px-4 py-3 text-sm font-semibold text-white shadow-lg">
                    <div class="flex items-center gap-3">
                        <span>{toast.message}</span>
                        <button
                            class="ml-2 text-xs text-slate-300 hover:text-white"
                            on:click=move |_| store.dispatch(Event::DismissToast)
                            aria-label="Zamknij powiadomienie"
                        >
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
