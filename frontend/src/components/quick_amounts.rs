use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QuickAmountsProps {
    pub amounts: Vec<i64>,
    pub disabled: bool,
    pub on_add: Callback<i64>,
    pub on_clear: Callback<()>,
}

/// Chip label: "+10k", "+1M", "-5k", or the raw value when not a round thousand
pub fn chip_label(delta: i64) -> String {
    let sign = if delta < 0 { "-" } else { "+" };
    let magnitude = delta.unsigned_abs();
    if magnitude != 0 && magnitude % 1_000_000 == 0 {
        format!("{}{}M", sign, magnitude / 1_000_000)
    } else if magnitude != 0 && magnitude % 1_000 == 0 {
        format!("{}{}k", sign, magnitude / 1_000)
    } else {
        format!("{}{}", sign, magnitude)
    }
}

#[function_component(QuickAmounts)]
pub fn quick_amounts(props: &QuickAmountsProps) -> Html {
    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <div class="quick-amounts">
            {for props.amounts.iter().copied().map(|delta| {
                let on_add = props.on_add.clone();
                html! {
                    <button
                        type="button"
                        class="amount-chip"
                        disabled={props.disabled}
                        onclick={Callback::from(move |_: MouseEvent| on_add.emit(delta))}
                    >
                        {chip_label(delta)}
                    </button>
                }
            })}
            <button type="button" class="amount-chip clear" disabled={props.disabled} onclick={on_clear}>
                {"C"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_labels() {
        assert_eq!(chip_label(10_000), "+10k");
        assert_eq!(chip_label(500_000), "+500k");
        assert_eq!(chip_label(1_000_000), "+1M");
        assert_eq!(chip_label(-5_000), "-5k");
        assert_eq!(chip_label(1_500), "+1500");
        assert_eq!(chip_label(0), "+0");
    }
}
