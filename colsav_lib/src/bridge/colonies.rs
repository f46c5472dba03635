//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Colony translation.
//!
//! Colonies cross the bridge with their identity fields: owner, name, position and
//! population. The classic colony internals (occupations, buildings, stocks...) stay on
//! the classic side until the modern colony model is final.
//!
//! Colony order matters: trade-route stops reference colonies by vector index on the
//! classic side and by ID on the modern side, so both converters record the
//! correspondence in the shared [`IdMap`].
//!
//! [`IdMap`]: super::IdMap

use crate::error::Result;
use crate::files::sav::ColonySav;
use crate::schema::{self, NationType};
use crate::state::{ColoniesState, Colony, Coord, Nation, RootState};

use super::{err, get_ng_id, IdMap};

//---------------------------------------------------------------------------//
//                              Implementation
//---------------------------------------------------------------------------//

fn og_nation_to_ng(nation: NationType) -> Option<Nation> {
    match nation {
        NationType::England => Some(Nation::English),
        NationType::France => Some(Nation::French),
        NationType::Spain => Some(Nation::Spanish),
        NationType::Netherlands => Some(Nation::Dutch),
        _ => None,
    }
}

fn ng_nation_to_og(nation: Nation) -> NationType {
    match nation {
        Nation::English => NationType::England,
        Nation::French => NationType::France,
        Nation::Spanish => NationType::Spain,
        Nation::Dutch => NationType::Netherlands,
    }
}

pub(crate) fn convert_colonies_to_ng(sav: &ColonySav, out: &mut ColoniesState, id_map: &IdMap) -> Result<()> {
    out.colonies.clear();
    out.last_colony_id = 0;

    for (index, og_colony) in sav.colony.iter().enumerate() {
        let ng_id = get_ng_id(&id_map.colony_ids, index as u32)?;
        let name = og_colony.name.to_text_string();

        let Some(nation) = og_nation_to_ng(og_colony.nation_id) else {
            return err(format!(
                "colony '{name}' is not owned by a colonial nation; such a save cannot be converted."
            ));
        };

        // The ring offset: classic coordinates count the invisible ocean border.
        let location = Coord {
            x: i32::from(og_colony.x_y[0]) - 1,
            y: i32::from(og_colony.x_y[1]) - 1,
        };

        out.last_colony_id = out.last_colony_id.max(ng_id);
        out.colonies.insert(ng_id, Colony {
            id: ng_id,
            nation,
            name,
            location,
            population: og_colony.population,
        });
    }

    Ok(())
}

pub(crate) fn convert_colonies_to_og(root: &RootState, out: &mut ColonySav, id_map: &mut IdMap) -> Result<()> {
    let count = root.colonies.colonies.len();
    if count > usize::from(u16::MAX) {
        return err(format!("The classic game cannot store {count} colonies."));
    }

    out.colony.clear();
    id_map.colony_ids.clear();

    for (index, (id, ng_colony)) in root.colonies.colonies.iter().enumerate() {
        id_map.colony_ids.insert(index as u32, *id);

        let mut og_colony = schema::Colony::default();

        let x = ng_colony.location.x + 1;
        let y = ng_colony.location.y + 1;
        if !(0..=255).contains(&x) || !(0..=255).contains(&y) {
            return err(format!(
                "colony '{}' sits at ({}, {}), outside the classic coordinate range.",
                ng_colony.name, ng_colony.location.x, ng_colony.location.y
            ));
        }
        og_colony.x_y = [x as u8, y as u8];

        if !og_colony.name.populate_from_str(&ng_colony.name) {
            return err(format!(
                "The classic game stores colony names in 24 bytes, but '{}' does not fit.",
                ng_colony.name
            ));
        }

        og_colony.nation_id = ng_nation_to_og(ng_colony.nation);
        og_colony.population = ng_colony.population;

        out.colony.push(og_colony);
    }

    out.header.colony_count = count as u16;
    Ok(())
}
