// SPDX-License-Identifier: MPL-2.0
//! Enquiry and contact form views.

use crate::enquiry::{Field, FormKind, Message, Outcome, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, toggler, Column, Container, Row, Space, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext { i18n, state } = ctx;
    let kind = state.kind();

    let title_key = match kind {
        FormKind::Enquiry => "enquiry-title",
        FormKind::Contact => "contact-title",
    };

    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_MD));

    for field in kind.fields() {
        column = column.push(field_input(i18n, state, *field));
    }

    if kind == FormKind::Enquiry {
        column = column.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(iced::Alignment::Center)
                .push(Text::new(i18n.tr("form-field-delivery")).size(typography::BODY))
                .push(Space::new().width(Length::Fill))
                .push(toggler(state.delivery()).on_toggle(Message::DeliveryToggled)),
        );
    }

    let submit_label = if state.is_submitting() {
        i18n.tr(kind.progress_key())
    } else {
        i18n.tr("form-submit")
    };
    let submit = button(Text::new(submit_label))
        .padding(spacing::XS)
        .style(styles::button::primary);
    let submit = if state.is_submitting() {
        submit
    } else {
        submit.on_press(Message::Submit)
    };
    column = column.push(submit);

    if let Some(outcome) = state.outcome() {
        column = column.push(outcome_panel(i18n, state, outcome));
    }

    Container::new(column)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn field_input<'a>(i18n: &'a I18n, state: &'a State, field: Field) -> Element<'a, Message> {
    let label = i18n.tr(field.label_key());
    let required = state.kind().required().contains(&field);
    let label = if required { format!("{label} *") } else { label };

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(
            text_input(&i18n.tr(placeholder_key(field)), state.value(field))
                .on_input(move |value| Message::FieldChanged(field, value))
                .on_submit(Message::Submit)
                .padding(spacing::XS),
        );

    if let Some(violation) = state.error_for(field) {
        column = column.push(
            Container::new(Text::new(i18n.tr(violation.i18n_key())).size(typography::CAPTION))
                .style(styles::container::field_error),
        );
    }
    column.into()
}

fn placeholder_key(field: Field) -> &'static str {
    match field {
        Field::Phone => "form-placeholder-phone",
        Field::EnquiryType => "form-placeholder-enquiry-type",
        Field::ProductInterest => "form-placeholder-product",
        Field::Quantity => "form-placeholder-quantity",
        Field::MessageType => "form-placeholder-message-type",
        _ => "form-placeholder-text",
    }
}

fn outcome_panel<'a>(
    i18n: &'a I18n,
    state: &'a State,
    outcome: &'a Outcome,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);
    let mut actions = Row::new().spacing(spacing::SM);

    match outcome {
        Outcome::Enquiry(response) => {
            column = column
                .push(Text::new(i18n.tr("enquiry-response-title")).size(typography::TITLE_MD))
                .push(Text::new(response.render(i18n)).size(typography::BODY));
        }
        Outcome::Contact { mailto } => {
            column = column
                .push(Text::new(i18n.tr("contact-response-title")).size(typography::TITLE_MD))
                .push(Text::new(i18n.tr("contact-response-body")).size(typography::BODY));
            if state.mail_client_failed() {
                column = column
                    .push(
                        Container::new(
                            Text::new(i18n.tr("contact-open-failed")).size(typography::BODY),
                        )
                        .style(styles::container::field_error),
                    )
                    .push(Text::new(mailto.as_str()).size(typography::CAPTION));
                actions = actions.push(
                    button(Text::new(i18n.tr("contact-copy-link")))
                        .style(styles::button::secondary)
                        .on_press(Message::CopyMailto),
                );
            }
            actions = actions.push(
                button(Text::new(i18n.tr("contact-open-mail")))
                    .style(styles::button::primary)
                    .on_press(Message::OpenMailClient),
            );
        }
    }

    actions = actions.push(
        button(Text::new(i18n.tr("form-dismiss")))
            .style(styles::button::secondary)
            .on_press(Message::DismissOutcome),
    );

    Container::new(column.push(actions))
        .padding(spacing::MD)
        .style(styles::container::success)
        .into()
}
