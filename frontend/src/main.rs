use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::forms::expense_form::ExpenseFormView;
use hooks::use_expense_form::use_expense_form;
use services::config::load_form_config;
use services::logging::init_tracing;
use services::telegram::detect_bridge;

#[function_component(App)]
fn app() -> Html {
    // Resolved once per page load
    let config = use_memo((), |_| load_form_config());
    let bridge = use_memo((), |_| detect_bridge());

    let expense = use_expense_form((*bridge).clone(), config.clone());

    html! {
        <main class="container">
            <ExpenseFormView
                form={expense.form}
                quick_amounts={config.quick_amounts.clone()}
                actions={expense.actions}
            />
        </main>
    }
}

fn main() {
    init_tracing();
    yew::Renderer::<App>::new().render();
}
