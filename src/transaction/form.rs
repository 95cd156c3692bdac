use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::{
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    transaction::{
        core::TransactionType,
        validation::{MAX_AMOUNT, MAX_DESCRIPTION_LENGTH, MIN_DESCRIPTION_LENGTH},
    },
};

pub struct TransactionFormDefaults<'a> {
    /// The type to select, `None` leaves both unselected.
    pub transaction_type: Option<TransactionType>,
    pub amount: Option<Decimal>,
    pub description: Option<&'a str>,
    pub autofocus_amount: bool,
}

impl Default for TransactionFormDefaults<'_> {
    fn default() -> Self {
        Self {
            transaction_type: None,
            amount: None,
            description: None,
            autofocus_amount: true,
        }
    }
}

pub fn transaction_form_fields(defaults: &TransactionFormDefaults<'_>) -> Markup {
    let amount_str = defaults.amount.map(|amount| amount.to_string());

    html! {
        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Transaction type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                @for transaction_type in [TransactionType::Expense, TransactionType::Income] {
                    @let id = format!("transaction-type-{}", transaction_type.as_str());

                    div class="flex items-center gap-3"
                    {
                        input
                            name="type"
                            id=(id)
                            type="radio"
                            value=(transaction_type.as_str())
                            checked[defaults.transaction_type == Some(transaction_type)]
                            required
                            tabindex="0"
                            class=(FORM_RADIO_INPUT_STYLE);

                        label
                            for=(id)
                            class=(FORM_RADIO_LABEL_STYLE)
                        {
                            (transaction_type.label())
                        }
                    }
                }
            }
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    min="0.01"
                    max=(MAX_AMOUNT)
                    required
                    value=[amount_str.as_deref()]
                    autofocus[defaults.autofocus_amount]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label
                for="description"
                class=(FORM_LABEL_STYLE)
            {
                "Description"
            }

            input
                name="description"
                id="description"
                type="text"
                placeholder="Description"
                minlength=(MIN_DESCRIPTION_LENGTH)
                maxlength=(MAX_DESCRIPTION_LENGTH)
                required
                value=[defaults.description]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
