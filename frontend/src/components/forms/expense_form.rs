use shared::ExpenseForm;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::category_picker::CategoryPicker;
use crate::components::quick_amounts::QuickAmounts;
use crate::hooks::use_expense_form::UseExpenseFormActions;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormViewProps {
    // Form state
    pub form: ExpenseForm,
    pub quick_amounts: Vec<i64>,

    // Event handlers
    pub actions: UseExpenseFormActions,
}

fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

#[function_component(ExpenseFormView)]
pub fn expense_form_view(props: &ExpenseFormViewProps) -> Html {
    let form = &props.form;
    let actions = &props.actions;
    let closed = form.is_closed();

    let on_amount_input = {
        let set_amount = actions.set_amount.clone();
        Callback::from(move |e: InputEvent| set_amount.emit(input_value(e)))
    };
    let on_desc_input = {
        let set_description = actions.set_description.clone();
        Callback::from(move |e: InputEvent| set_description.emit(input_value(e)))
    };
    let on_person_input = {
        let set_person = actions.set_person.clone();
        Callback::from(move |e: InputEvent| set_person.emit(input_value(e)))
    };
    let on_submit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <section class="expense-section">
            <h2>{"💸 Ghi chi tiêu"}</h2>

            {if closed {
                html! {
                    <div class="form-message success">
                        {"✅ Đã gửi!"}
                    </div>
                }
            } else { html! {} }}

            <form class="expense-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label>{"Danh mục"}</label>
                    <CategoryPicker
                        selected={form.category()}
                        disabled={closed}
                        on_select={actions.select_category.clone()}
                    />
                    <input type="hidden" id="category" name="category" value={form.category_field()} />
                </div>

                <div class="form-group">
                    <label for="amount">{"Số tiền"}</label>
                    <input
                        type="text"
                        inputmode="numeric"
                        id="amount"
                        name="amount"
                        placeholder="50000"
                        autocomplete="off"
                        value={form.amount().to_string()}
                        oninput={on_amount_input}
                        disabled={closed}
                    />
                    <QuickAmounts
                        amounts={props.quick_amounts.clone()}
                        disabled={closed}
                        on_add={actions.add_amount.clone()}
                        on_clear={actions.clear_amount.clone()}
                    />
                </div>

                <div class="form-group">
                    <label for="desc">{"Mô tả"}</label>
                    <input
                        type="text"
                        id="desc"
                        name="desc"
                        placeholder={form.category_field()}
                        value={form.description().to_string()}
                        oninput={on_desc_input}
                        disabled={closed}
                    />
                </div>

                <div class="form-group">
                    <label for="person">{"Người"}</label>
                    <input
                        type="text"
                        id="person"
                        name="person"
                        placeholder="Bản thân"
                        value={form.person().to_string()}
                        oninput={on_person_input}
                        disabled={closed}
                    />
                </div>

                <button type="submit" class="btn btn-primary submit-btn" disabled={closed}>
                    {"Lưu chi tiêu"}
                </button>
            </form>
        </section>
    }
}
