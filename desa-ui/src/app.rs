use crate::api;
use crate::session::Auth;
use desa_core::auth::{validate_credentials, validate_registration, Credentials, Registration};
use desa_core::metrics::DashboardMetrics;
use desa_core::records::{validate_new_penduduk, NewPenduduk, Penduduk};
use desa_core::refresh::Generation;
use desa_core::surat::{JenisSurat, SuratRequest};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

const MSG_SURAT_SENT: &str = "Pengajuan surat dikirim";
const DEFAULT_ROLE_LABEL: &str = "warga";

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn App() -> impl IntoView {
    let auth = Auth::init();

    view! {
      <Show
        when=move || auth.is_authenticated()
        fallback=move || view! { <Landing auth/> }
      >
        <Shell auth/>
      </Show>
    }
}

#[component]
fn Landing(auth: Auth) -> impl IntoView {
    view! {
      <header class="topbar">
        <div class="brand">"Smart Desa"</div>
      </header>
      <main class="layout two-col">
        <section class="panel intro">
          <h1>"Sistem Informasi Terintegrasi Desa"</h1>
          <p>
            "Kelola penduduk, surat digital, bantuan sosial, keuangan, aset, "
            "dan dashboard transparansi dalam satu aplikasi modern."
          </p>
          <ul class="features">
            <li>"Login & Registrasi"</li>
            <li>"Surat Digital"</li>
            <li>"Bantuan Sosial"</li>
            <li>"Keuangan Desa"</li>
            <li>"Aset Desa"</li>
            <li>"Dashboard Transparansi"</li>
          </ul>
        </section>
        <AuthPanel auth/>
      </main>
    }
}

#[component]
fn AuthPanel(auth: Auth) -> impl IntoView {
    let mode = create_rw_signal(AuthMode::Login);
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let loading = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let submit = move |_| {
        error.set(None);
        match mode.get_untracked() {
            AuthMode::Login => {
                let credentials = Credentials {
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                };
                if let Err(err) = validate_credentials(&credentials) {
                    error.set(Some(err.to_string()));
                    return;
                }
                loading.set(true);
                spawn_local(async move {
                    if let Err(err) = auth.login(credentials).await {
                        error.set(Some(err.to_string()));
                    }
                    loading.set(false);
                });
            }
            AuthMode::Register => {
                let registration = Registration {
                    name: name.get_untracked(),
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                };
                if let Err(err) = validate_registration(&registration) {
                    error.set(Some(err.to_string()));
                    return;
                }
                loading.set(true);
                spawn_local(async move {
                    if let Err(err) = auth.register(registration).await {
                        error.set(Some(err.to_string()));
                    }
                    loading.set(false);
                });
            }
        }
    };

    view! {
      <section class="panel auth">
        <h2>{move || if mode.get() == AuthMode::Login { "Masuk" } else { "Daftar" }}</h2>
        <div class="stack">
          <Show when=move || mode.get() == AuthMode::Register fallback=|| ()>
            <input
              prop:value=move || name.get()
              on:input=move |ev| name.set(event_target_value(&ev))
              placeholder="Nama"
            />
          </Show>
          <input
            prop:value=move || email.get()
            on:input=move |ev| email.set(event_target_value(&ev))
            placeholder="Email"
            type="email"
          />
          <input
            prop:value=move || password.get()
            on:input=move |ev| password.set(event_target_value(&ev))
            placeholder="Password"
            type="password"
          />
          <Show when=move || error.get().is_some() fallback=|| ()>
            <p class="error">{move || error.get().unwrap_or_default()}</p>
          </Show>
          <button disabled=move || loading.get() on:click=submit>
            {move || if mode.get() == AuthMode::Login { "Masuk" } else { "Daftar" }}
          </button>
          <p class="meta">
            {move || if mode.get() == AuthMode::Login {
                "Belum punya akun?"
            } else {
                "Sudah punya akun?"
            }}
            " "
            <button
              class="link"
              on:click=move |_| mode.update(|m| {
                  *m = if *m == AuthMode::Login { AuthMode::Register } else { AuthMode::Login };
              })
            >
              {move || if mode.get() == AuthMode::Login { "Daftar" } else { "Masuk" }}
            </button>
          </p>
        </div>
      </section>
    }
}

#[component]
fn Shell(auth: Auth) -> impl IntoView {
    // The shell owns the refresh signal; a successful creation bumps it and
    // every observing view re-fetches.
    let refresh = create_rw_signal(Generation::new());

    view! {
      <header class="topbar">
        <div class="brand">"Smart Desa"</div>
        <div class="row">
          <span class="meta">
            {move || auth.role.get().unwrap_or_else(|| DEFAULT_ROLE_LABEL.to_string())}
          </span>
          <button on:click=move |_| auth.logout()>"Keluar"</button>
        </div>
      </header>
      <main class="layout two-col">
        <div class="stack">
          <Dashboard auth refresh/>
          <PendudukForm auth refresh/>
          <SuratForm auth/>
        </div>
        <div class="stack">
          <PendudukList auth refresh/>
        </div>
      </main>
    }
}

#[component]
fn Dashboard(auth: Auth, refresh: RwSignal<Generation>) -> impl IntoView {
    let metrics = create_rw_signal(DashboardMetrics::default());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    create_effect(move |_| {
        let stamp = refresh.get();
        let headers = auth.headers_snapshot();
        spawn_local(async move {
            let result = api::dashboard_metrics(&headers).await;
            if !refresh.get_untracked().is_current(stamp) {
                log::debug!("discarding stale dashboard response");
                return;
            }
            match result {
                Ok(snapshot) => {
                    metrics.set(snapshot);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let stat = move |value: u64| {
        if loading.get() {
            "...".to_string()
        } else {
            value.to_string()
        }
    };

    view! {
      <section class="panel">
        <h2>"Dasbor"</h2>
        <Show when=move || error.get().is_some() fallback=|| ()>
          <p class="error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <div class="cards">
          <div class="card">
            <div class="label">"Penduduk"</div>
            <div class="stat">{move || stat(metrics.get().penduduk)}</div>
          </div>
          <div class="card">
            <div class="label">"Surat"</div>
            <div class="stat">{move || stat(metrics.get().surat)}</div>
          </div>
          <div class="card">
            <div class="label">"Bansos"</div>
            <div class="stat">{move || stat(metrics.get().bansos)}</div>
          </div>
          <div class="card">
            <div class="label">"Keuangan"</div>
            <div class="meta">
              {move || format!("Pemasukan: {}", metrics.get().keuangan.pemasukan)}
            </div>
            <div class="meta">
              {move || format!("Pengeluaran: {}", metrics.get().keuangan.pengeluaran)}
            </div>
          </div>
        </div>
      </section>
    }
}

#[component]
fn PendudukForm(auth: Auth, refresh: RwSignal<Generation>) -> impl IntoView {
    let nik = create_rw_signal(String::new());
    let nama = create_rw_signal(String::new());
    let pekerjaan = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit = move |_| {
        let record = NewPenduduk {
            nik: nik.get_untracked(),
            nama: nama.get_untracked(),
            pekerjaan: pekerjaan.get_untracked(),
        };
        // A failed required-field check stops here: no request is issued.
        if let Err(err) = validate_new_penduduk(&record) {
            error.set(Some(err.to_string()));
            return;
        }
        let headers = auth.headers_snapshot();
        spawn_local(async move {
            match api::create_penduduk(&record, &headers).await {
                Ok(()) => {
                    nik.set(String::new());
                    nama.set(String::new());
                    pekerjaan.set(String::new());
                    error.set(None);
                    refresh.update(|generation| generation.bump());
                }
                // Failure keeps the inputs as typed.
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
      <section class="panel">
        <h2>"Tambah Penduduk"</h2>
        <div class="row">
          <input
            prop:value=move || nik.get()
            on:input=move |ev| nik.set(event_target_value(&ev))
            placeholder="NIK"
          />
          <input
            prop:value=move || nama.get()
            on:input=move |ev| nama.set(event_target_value(&ev))
            placeholder="Nama"
          />
          <input
            prop:value=move || pekerjaan.get()
            on:input=move |ev| pekerjaan.set(event_target_value(&ev))
            placeholder="Pekerjaan"
          />
          <button on:click=submit>"Simpan"</button>
        </div>
        <Show when=move || error.get().is_some() fallback=|| ()>
          <p class="error">{move || error.get().unwrap_or_default()}</p>
        </Show>
      </section>
    }
}

#[component]
fn SuratForm(auth: Auth) -> impl IntoView {
    let jenis = create_rw_signal(JenisSurat::Sku);
    let status = create_rw_signal(None::<String>);

    let submit = move |_| {
        let request = SuratRequest::new(auth.requester_reference(), jenis.get_untracked());
        let headers = auth.headers_snapshot();
        spawn_local(async move {
            match api::submit_surat(&request, &headers).await {
                Ok(()) => status.set(Some(MSG_SURAT_SENT.to_string())),
                Err(err) => status.set(Some(err.to_string())),
            }
        });
    };

    view! {
      <section class="panel">
        <h2>"Ajukan Surat"</h2>
        <div class="row">
          <select
            prop:value=move || jenis.get().wire_name().to_string()
            on:change=move |ev| {
                if let Some(choice) = JenisSurat::from_wire(&event_target_value(&ev)) {
                    jenis.set(choice);
                }
            }
          >
            {JenisSurat::ALL
                .into_iter()
                .map(|j| view! { <option value=j.wire_name()>{j.label()}</option> })
                .collect_view()}
          </select>
          <button on:click=submit>"Kirim"</button>
        </div>
        <Show when=move || status.get().is_some() fallback=|| ()>
          <p class="meta">{move || status.get().unwrap_or_default()}</p>
        </Show>
      </section>
    }
}

#[component]
fn PendudukList(auth: Auth, refresh: RwSignal<Generation>) -> impl IntoView {
    let items = create_rw_signal(Vec::<Penduduk>::new());
    let error = create_rw_signal(None::<String>);

    create_effect(move |_| {
        let stamp = refresh.get();
        let headers = auth.headers_snapshot();
        spawn_local(async move {
            let result = api::list_penduduk(&headers).await;
            if !refresh.get_untracked().is_current(stamp) {
                log::debug!("discarding stale penduduk list response");
                return;
            }
            match result {
                Ok(list) => {
                    items.set(list);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    view! {
      <section class="panel">
        <h2>"Data Penduduk"</h2>
        <Show when=move || error.get().is_some() fallback=|| ()>
          <p class="error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <table>
          <thead>
            <tr>
              <th>"NIK"</th>
              <th>"Nama"</th>
              <th>"Pekerjaan"</th>
            </tr>
          </thead>
          <tbody>
            <For
              each=move || items.get()
              key=|it| it.id.clone()
              children=move |it| {
                  let pekerjaan = it.pekerjaan.clone().unwrap_or_else(|| "-".to_string());
                  view! {
                    <tr>
                      <td>{it.nik.clone()}</td>
                      <td>{it.nama.clone()}</td>
                      <td>{pekerjaan}</td>
                    </tr>
                  }
              }
            />
          </tbody>
        </table>
      </section>
    }
}
