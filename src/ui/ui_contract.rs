//! Step 3: static contract preview.
//!
//! Pure display. The template is illustrative and deliberately not
//! parameterized by the selected features; only forward/back navigation.

use eframe::egui::{RichText, ScrollArea, TextStyle, Ui};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, nav_row};

const CONTRACT_TEMPLATE: &str = r#"// Contract scaffolding...
import "@openzeppelin/contracts/token/ERC20/ERC20.sol";
import "@openzeppelin/contracts/access/Ownable.sol";

contract ForgeToken is ERC20, Ownable {
    constructor() ERC20("Forge", "FRG") {
        _mint(msg.sender, 1000000 * 10 ** decimals());
    }
}"#;

pub enum ContractEvent {
    Back,
    Next,
}

#[derive(Default)]
pub struct ContractPanel;

impl Panel for ContractPanel {
    type Event = ContractEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.label_header(UI_TEXT.contract_heading);
        ui.add_space(8.0);
        ui.label_subdued(UI_TEXT.contract_blurb);
        ui.add_space(8.0);

        ScrollArea::vertical()
            .max_height(UI_CONFIG.contract_preview_height)
            .id_salt("contract_preview")
            .show(ui, |ui| {
                ui.label(
                    RichText::new(CONTRACT_TEMPLATE)
                        .text_style(TextStyle::Monospace)
                        .color(UI_CONFIG.colors.accent),
                );
            });

        let (back, next) = nav_row(ui, true, true, UI_TEXT.next);
        if back {
            events.push(ContractEvent::Back);
        }
        if next {
            events.push(ContractEvent::Next);
        }

        events
    }
}
