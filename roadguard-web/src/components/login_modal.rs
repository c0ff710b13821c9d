use roadguard_core::LoginStage;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub stage: LoginStage,
    pub on_send_otp: Callback<String>,
    pub on_verify_otp: Callback<String>,
    pub on_close: Callback<()>,
}

/// Two-step login dialog: phone entry, then the one-time passcode.
///
/// The code row only appears once a valid number has been submitted, so the
/// visible controls always match the flow stage.
#[function_component(LoginModal)]
pub fn login_modal(p: &Props) -> Html {
    let phone_ref = use_node_ref();
    let code_ref = use_node_ref();

    if !p.open {
        return Html::default();
    }

    let awaiting_code = matches!(p.stage, LoginStage::AwaitingCode { .. });

    let send_otp = {
        let phone_ref = phone_ref.clone();
        let cb = p.on_send_otp.clone();
        Callback::from(move |_| {
            if let Some(input) = phone_ref.cast::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let verify_otp = {
        let code_ref = code_ref.clone();
        let cb = p.on_verify_otp.clone();
        Callback::from(move |_| {
            if let Some(input) = code_ref.cast::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = p.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <div class="modal-backdrop" role="presentation" onclick={close.clone()}>
            <div
                id="login-modal"
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="login-title"
                onkeydown={on_keydown}
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="modal__header">
                    <h2 id="login-title">{"Login with your mobile number"}</h2>
                    <button
                        type="button"
                        class="modal__close"
                        aria-label="Close dialog"
                        onclick={close}
                    >
                        {"X"}
                    </button>
                </div>
                <div class="modal__body">
                    <label for="phone">{"Mobile number"}</label>
                    <input
                        id="phone"
                        ref={phone_ref}
                        type="tel"
                        placeholder="+919876543210"
                        autocomplete="tel"
                    />
                    <button id="send-otp" onclick={send_otp}>
                        { if awaiting_code { "Resend OTP" } else { "Send OTP" } }
                    </button>
                    if awaiting_code {
                        <div id="otp-row">
                            <label for="otp">{"One-time passcode"}</label>
                            <input id="otp" ref={code_ref} type="text" inputmode="numeric" />
                            <button id="verify-otp" onclick={verify_otp}>{"Verify"}</button>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
