//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Player translation.
//!
//! The classic format has four fixed colonial slots; the modern model has four colonial
//! and four expeditionary-force player slots. Going modern-ward all four colonial players
//! are created (inactive slots included, since the classic format always stores all
//! four), plus one force player when independence has been declared. Going legacy-ward a
//! force player collapses back into an AI-controlled colonial slot; multiple force
//! players, or a human-controlled one, have no classic equivalent.

use crate::error::Result;
use crate::files::sav::ColonySav;
use crate::schema::ControlType;
use crate::state::{
    Nation, Player, PlayerControl, PlayerKind, PlayersState, RevolutionStatus, RootState,
};

use super::{err, independence_declared};

//---------------------------------------------------------------------------//
//                              Implementation
//---------------------------------------------------------------------------//

pub(crate) fn convert_players_to_ng(sav: &ColonySav, out: &mut PlayersState) -> Result<()> {
    out.players.clear();

    let declared = independence_declared(sav)?;

    // All four colonial players exist in the classic format, though some may be
    // withdrawn; create all four and let the control field tell them apart.
    for nation in Nation::ALL {
        let kind = PlayerKind::colonial_for(nation);
        let slot = nation.slot_index();
        let og_player = &sav.player[slot];

        let mut player = Player::new(kind);
        player.name = og_player.name.to_text_string();
        player.country_name = og_player.country_name.to_text_string();
        player.control = match og_player.control {
            ControlType::Player => PlayerControl::Human,
            ControlType::Ai => PlayerControl::Ai,
            ControlType::Withdrawn | ControlType::Unrecognized(_) => PlayerControl::Inactive,
        };
        player.revolution.rebel_sentiment = i32::from(sav.nation[slot].rebel_sentiment);
        out.players.insert(kind, player);
    }

    if let Some(human) = declared.human {
        let declarer = PlayerKind::colonial_for(human.declared);
        if let Some(player) = out.players.get_mut(&declarer) {
            player.revolution.status = if sav.header.game_flags_1.won_independence {
                RevolutionStatus::Won
            } else {
                RevolutionStatus::Declared
            };
        }

        // The force player only exists post-declaration, and is always AI.
        let kind = PlayerKind::ref_for(human.declared);
        let mut ref_player = Player::new(kind);
        ref_player.control = PlayerControl::Ai;
        out.players.insert(kind, ref_player);
    }

    Ok(())
}

pub(crate) fn convert_players_to_og(root: &RootState, human: &Player, out: &mut ColonySav) -> Result<()> {
    if human.revolution.rebel_sentiment >= 50 && !root.events.war_of_succession_done {
        return err(
            "rebel sentiment is >= 50 but the war of succession has not been done, possibly \
             due to config settings. Such a game cannot be correctly converted.",
        );
    }

    // Colonial players first. Slots without a player, or with an inactive one, stay
    // withdrawn unless the force pass below claims them.
    for nation in Nation::ALL {
        let slot = nation.slot_index();
        out.player[slot].control = ControlType::Withdrawn;

        let Some(ng_player) = root.players.players.get(&PlayerKind::colonial_for(nation)) else {
            continue;
        };

        out.player[slot].control = match ng_player.control {
            PlayerControl::Inactive => ControlType::Withdrawn,
            PlayerControl::Human => ControlType::Player,
            PlayerControl::Ai => ControlType::Ai,
        };

        if !out.player[slot].name.populate_from_str(&ng_player.name) {
            return err(format!(
                "The classic game stores player names in 24 bytes, but '{}' does not fit.",
                ng_player.name
            ));
        }
        if !out.player[slot].country_name.populate_from_str(&ng_player.country_name) {
            return err(format!(
                "The classic game stores country names in 24 bytes, but '{}' does not fit.",
                ng_player.country_name
            ));
        }

        let sentiment = ng_player.revolution.rebel_sentiment.clamp(i32::from(i8::MIN), i32::from(i8::MAX));
        out.nation[slot].rebel_sentiment = sentiment as i8;
    }

    // Expeditionary-force players. At most one can exist, and it is AI even after it has
    // lost the war.
    let mut found_ref = false;
    for nation in Nation::ALL {
        let Some(ng_ref_player) = root.players.players.get(&PlayerKind::ref_for(nation)) else {
            continue;
        };
        if found_ref {
            return err("Multiple REF players are not compatible with the classic game.");
        }
        found_ref = true;

        match ng_ref_player.control {
            PlayerControl::Inactive | PlayerControl::Ai => {
                out.player[nation.slot_index()].control = ControlType::Ai;
            },
            PlayerControl::Human => {
                return err("Human-controlled REF players are not compatible with the classic game.");
            },
        }
    }

    Ok(())
}
