// SPDX-License-Identifier: MPL-2.0
//! Gallery section: one row of thumbnails per gallery group.

use crate::gallery::lightbox::Message;
use crate::gallery::{GroupName, TriggerId, TriggerRegistry, DEFAULT_GROUP};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Image, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub registry: &'a TriggerRegistry,
    pub triggers: &'a [TriggerId],
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        registry,
        triggers,
    } = ctx;

    if triggers.is_empty() {
        return Text::new(i18n.tr("gallery-empty")).into();
    }

    let mut column = Column::new().spacing(spacing::LG);
    for (group, members) in by_group(registry, triggers) {
        let heading = if group.as_str() == DEFAULT_GROUP {
            i18n.tr("gallery-default-group")
        } else {
            group.as_str().to_string()
        };
        let thumbnails = members
            .into_iter()
            .filter_map(|id| registry.image(id).map(|image| (id, image)))
            .fold(Row::new().spacing(spacing::SM), |row, (id, image_ref)| {
                row.push(
                    button(
                        Image::new(image::Handle::from_path(image_ref.source()))
                            .width(Length::Fixed(sizing::THUMBNAIL))
                            .height(Length::Fixed(sizing::THUMBNAIL)),
                    )
                    .padding(0)
                    .style(styles::button::thumbnail)
                    .on_press(Message::Open(id)),
                )
            })
            .wrap();
        column = column
            .push(Text::new(heading).size(typography::TITLE_MD))
            .push(thumbnails);
    }
    column.into()
}

/// Groups `triggers` by gallery group, keeping first-seen group order.
fn by_group<'a>(
    registry: &'a TriggerRegistry,
    triggers: &[TriggerId],
) -> Vec<(&'a GroupName, Vec<TriggerId>)> {
    let mut groups: Vec<(&GroupName, Vec<TriggerId>)> = Vec::new();
    for id in triggers {
        let Some(group) = registry.group_of(*id) else {
            continue;
        };
        match groups.iter_mut().find(|(name, _)| *name == group) {
            Some((_, members)) => members.push(*id),
            None => groups.push((group, vec![*id])),
        }
    }
    groups
}
