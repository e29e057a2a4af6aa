use std::rc::Rc;

use shared::{Category, ExpenseForm, FormConfig, HostBridge};
use yew::prelude::*;

use crate::services::telegram::RootStyle;

/// User interactions the form reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SelectCategory(Category),
    AddAmount(i64),
    ClearAmount,
    SetAmount(String),
    SetDescription(String),
    SetPerson(String),
    Submit,
}

/// Form state plus the bridge that submission talks to
#[derive(Clone)]
pub struct FormState {
    pub form: ExpenseForm,
    bridge: Rc<dyn HostBridge>,
}

impl FormState {
    pub fn new(form: ExpenseForm, bridge: Rc<dyn HostBridge>) -> Self {
        Self { form, bridge }
    }
}

impl PartialEq for FormState {
    fn eq(&self, other: &Self) -> bool {
        self.form == other.form && Rc::ptr_eq(&self.bridge, &other.bridge)
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    // Actions are applied in dispatch order against the latest state, so a
    // second submit queued before re-render sees the form already closed.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.form.clone();
        match action {
            FormAction::SelectCategory(category) => form.select_category(category),
            FormAction::AddAmount(delta) => form.add_amount(delta),
            FormAction::ClearAmount => form.clear_amount(),
            FormAction::SetAmount(value) => form.set_amount(value),
            FormAction::SetDescription(value) => form.set_description(value),
            FormAction::SetPerson(value) => form.set_person(value),
            FormAction::Submit => {
                // Outcome is logged by the controller; alerts go through the bridge
                let _ = form.submit(&*self.bridge);
            }
        }

        if form == self.form {
            return self;
        }
        Rc::new(FormState {
            form,
            bridge: self.bridge.clone(),
        })
    }
}

pub struct UseExpenseFormResult {
    pub form: ExpenseForm,
    pub actions: UseExpenseFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseExpenseFormActions {
    pub select_category: Callback<Category>,
    pub add_amount: Callback<i64>,
    pub clear_amount: Callback<()>,
    pub set_amount: Callback<String>,
    pub set_description: Callback<String>,
    pub set_person: Callback<String>,
    pub submit: Callback<()>,
}

fn dispatch_callback<T: 'static>(
    dispatcher: &UseReducerDispatcher<FormState>,
    to_action: impl Fn(T) -> FormAction + 'static,
) -> Callback<T> {
    let dispatcher = dispatcher.clone();
    Callback::from(move |value: T| dispatcher.dispatch(to_action(value)))
}

/// Hook owning the expense form state for the lifetime of the view
#[hook]
pub fn use_expense_form(bridge: Rc<dyn HostBridge>, config: Rc<FormConfig>) -> UseExpenseFormResult {
    // The initializer runs once, on mount: expand the view and sync the theme
    let state = use_reducer(move || {
        let form = ExpenseForm::load(&*bridge, &RootStyle, &config);
        FormState::new(form, bridge)
    });

    let dispatcher = state.dispatcher();
    let actions = UseExpenseFormActions {
        select_category: dispatch_callback(&dispatcher, FormAction::SelectCategory),
        add_amount: dispatch_callback(&dispatcher, FormAction::AddAmount),
        clear_amount: dispatch_callback(&dispatcher, |_: ()| FormAction::ClearAmount),
        set_amount: dispatch_callback(&dispatcher, FormAction::SetAmount),
        set_description: dispatch_callback(&dispatcher, FormAction::SetDescription),
        set_person: dispatch_callback(&dispatcher, FormAction::SetPerson),
        submit: dispatch_callback(&dispatcher, |_: ()| FormAction::Submit),
    };

    UseExpenseFormResult {
        form: state.form.clone(),
        actions,
    }
}
