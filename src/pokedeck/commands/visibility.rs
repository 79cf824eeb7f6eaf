use crate::commands::{CmdMessage, CmdResult};
use crate::display::DisplayList;
use crate::model::CreatureId;

pub fn show_all(display: &mut DisplayList) -> CmdResult {
    display.show_all();
    CmdResult::default().with_listed(display.records().to_vec())
}

pub fn hide_all(display: &mut DisplayList) -> CmdResult {
    display.hide_all();
    CmdResult::default().with_listed(display.records().to_vec())
}

pub fn toggle(display: &mut DisplayList, id: CreatureId) -> CmdResult {
    let mut result = CmdResult::default();
    if display.toggle(id).is_none() {
        result.add_message(CmdMessage::info(format!("No card for #{}", id)));
    }
    result.with_listed(display.records().to_vec())
}
