use shared::Category;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryPickerProps {
    pub selected: Category,
    pub disabled: bool,
    pub on_select: Callback<Category>,
}

#[function_component(CategoryPicker)]
pub fn category_picker(props: &CategoryPickerProps) -> Html {
    html! {
        <div class="category-grid">
            {for Category::ALL.into_iter().map(|category| {
                let on_select = props.on_select.clone();
                html! {
                    <button
                        type="button"
                        key={category.key()}
                        class={classes!("cat-btn", (props.selected == category).then_some("active"))}
                        data-category={category.key()}
                        disabled={props.disabled}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(category))}
                    >
                        <span class="cat-icon">{category.icon()}</span>
                        <span class="cat-name">{category.display_name()}</span>
                    </button>
                }
            })}
        </div>
    }
}
