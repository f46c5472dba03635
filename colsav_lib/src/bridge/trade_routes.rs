//---------------------------------------------------------------------------//
// Copyright (c) 2023-2026 the ColSav project contributors. All rights reserved.
//
// This file is part of the ColSav (Colonization Save Manager) project,
// which can be found here: https://github.com/colsav/colsav.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/colsav/colsav/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Trade-route translation.
//!
//! The classic format supports at most 12 routes per save, each with at most 4 stops,
//! each stop loading/unloading at most 6 commodity slots, route names of at most 32
//! bytes, and every route owned by the single human player. The modern model has none of
//! these limits, so each one becomes an explicit error legacy-ward. A stop's target is
//! either a colony (by index) or the harbor, stored as the index sentinel 999.

use crate::error::Result;
use crate::files::sav::ColonySav;
use crate::schema::{self, RouteStop, TradeRouteKindType};
use crate::state::{
    Player, PlayerKind, RootState, TradeRoute, TradeRouteKind, TradeRouteState, TradeRouteStop,
    TradeRouteTarget,
};

use super::{commodity_to_og_cargo, err, get_ng_id, get_og_index, og_cargo_to_commodity, IdMap};

/// Routes one save can hold.
const MAX_ROUTES: usize = 12;

/// Commodity slots one stop can load or unload.
const MAX_SLOTS: usize = 6;

/// Stop target marking the european harbor instead of a colony.
const HARBOR_SENTINEL: u16 = 999;

//---------------------------------------------------------------------------//
//                              Implementation
//---------------------------------------------------------------------------//

pub(crate) fn convert_trade_routes_to_ng(
    sav: &ColonySav,
    human: PlayerKind,
    out: &mut TradeRouteState,
    id_map: &IdMap,
) -> Result<()> {
    out.routes.clear();
    out.last_trade_route_id = 0;

    for (index, og_route) in sav.trade_route.iter().enumerate() {
        if index >= usize::from(sav.header.trade_route_count) {
            break;
        }

        let ng_id = get_ng_id(&id_map.trade_route_ids, index as u32)?;
        out.last_trade_route_id = out.last_trade_route_id.max(ng_id);

        let kind = match og_route.land_or_sea {
            TradeRouteKindType::Land => TradeRouteKind::Land,
            TradeRouteKindType::Sea => TradeRouteKind::Sea,
            TradeRouteKindType::Unrecognized(raw) => {
                return err(format!("unrecognized trade route type 0x{raw:02x}."));
            },
        };

        let mut ng_route = TradeRoute {
            id: ng_id,
            name: og_route.name.to_text_string(),
            player: human,
            kind,
            stops: vec![],
        };

        let stops_count = usize::from(og_route.stops_count);
        if stops_count > schema::TradeRoute::MAX_STOPS {
            return err(format!(
                "trade route '{}' claims {} stops, but a route holds at most {}.",
                ng_route.name, stops_count, schema::TradeRoute::MAX_STOPS
            ));
        }

        for stop_index in 0..stops_count {
            let og_stop = og_route.stop(stop_index);

            let target = if og_stop.colony_index == HARBOR_SENTINEL {
                TradeRouteTarget::Harbor
            } else {
                let colony_id = get_ng_id(&id_map.colony_ids, u32::from(og_stop.colony_index))?;
                TradeRouteTarget::Colony { colony_id }
            };

            let n_loads = usize::from(og_stop.loads_count);
            let n_unloads = usize::from(og_stop.unloads_count);
            if n_loads > MAX_SLOTS || n_unloads > MAX_SLOTS {
                return err(format!(
                    "trade route '{}' has a stop with {} loads and {} unloads; at most {} \
                     of each fit a stop.",
                    ng_route.name, n_loads, n_unloads, MAX_SLOTS
                ));
            }

            ng_route.stops.push(TradeRouteStop {
                target,
                loads: og_stop.loads_cargo[..n_loads].iter().map(|cargo| og_cargo_to_commodity(*cargo)).collect(),
                unloads: og_stop.unloads_cargo[..n_unloads].iter().map(|cargo| og_cargo_to_commodity(*cargo)).collect(),
            });
        }

        out.routes.insert(ng_id, ng_route);
    }

    Ok(())
}

pub(crate) fn convert_trade_routes_to_og(
    root: &RootState,
    human: &Player,
    out: &mut ColonySav,
    id_map: &mut IdMap,
) -> Result<()> {
    let has_foreign_routes = root.trade_routes.routes.values()
        .any(|route| route.player != human.kind);
    if has_foreign_routes {
        return err(
            "The classic game does not support trade routes owned by players other than \
             the main human player.",
        );
    }

    let num_routes = root.trade_routes.routes.len();
    if num_routes > MAX_ROUTES {
        return err(format!(
            "The classic game only supports a maximum of {MAX_ROUTES} trade routes. There \
             are {num_routes} trade routes which exceeds the limit."
        ));
    }

    out.header.trade_route_count = num_routes as u16;
    out.trade_route = Default::default();
    id_map.trade_route_ids.clear();

    for (index, (id, ng_route)) in root.trade_routes.routes.iter().enumerate() {
        id_map.trade_route_ids.insert(index as u32, *id);

        if ng_route.stops.len() > schema::TradeRoute::MAX_STOPS {
            return err(format!(
                "The classic game supports a maximum of four stops per trade route, but \
                 there is one with {} stops.",
                ng_route.stops.len()
            ));
        }

        let og_route = &mut out.trade_route[index];

        if !og_route.name.populate_from_str(&ng_route.name) {
            return err(format!(
                "The classic game supports trade route names of maximum length 32, but \
                 encountered one of length {}.",
                ng_route.name.len()
            ));
        }

        og_route.land_or_sea = match ng_route.kind {
            TradeRouteKind::Land => TradeRouteKindType::Land,
            TradeRouteKind::Sea => TradeRouteKindType::Sea,
        };
        og_route.stops_count = ng_route.stops.len() as u8;

        for (stop_index, ng_stop) in ng_route.stops.iter().enumerate() {
            let mut og_stop = RouteStop::default();

            og_stop.colony_index = match ng_stop.target {
                TradeRouteTarget::Harbor => HARBOR_SENTINEL,
                TradeRouteTarget::Colony { colony_id } => {
                    match get_og_index(&id_map.colony_ids, colony_id) {
                        Ok(index) => index as u16,
                        Err(_) => {
                            return err(format!(
                                "Could not map colony ID {colony_id} to a legacy colony index."
                            ));
                        },
                    }
                },
            };

            if ng_stop.loads.len() > MAX_SLOTS {
                return err(format!(
                    "The classic game supports trade route commodity load counts of up to \
                     six, but there is one ({}) that loads {}.",
                    ng_route.name, ng_stop.loads.len()
                ));
            }
            if ng_stop.unloads.len() > MAX_SLOTS {
                return err(format!(
                    "The classic game supports trade route commodity unload counts of up \
                     to six, but there is one ({}) that unloads {}.",
                    ng_route.name, ng_stop.unloads.len()
                ));
            }

            og_stop.loads_count = ng_stop.loads.len() as u8;
            og_stop.unloads_count = ng_stop.unloads.len() as u8;
            for (slot, commodity) in ng_stop.loads.iter().enumerate() {
                og_stop.loads_cargo[slot] = commodity_to_og_cargo(*commodity);
            }
            for (slot, commodity) in ng_stop.unloads.iter().enumerate() {
                og_stop.unloads_cargo[slot] = commodity_to_og_cargo(*commodity);
            }

            og_route.set_stop(stop_index, og_stop);
        }
    }

    Ok(())
}
