//! Game session: handshake, init phase, then one action per turn until `END`.
//!
//! The loop owns the world model and the decider. Everything runs on the
//! calling thread; the engine paces the game by when it sends each turn.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tankbot_core::state::EngineMessage;
use tankbot_threat::assess;
use tankbot_world::WorldModel;

use crate::comms::{message_kind, ActionWriter, MessageReader, ProtocolError};
use crate::config::BotConfig;
use crate::decision::Decider;

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub seed: u64,
    /// Turns played, which is also the number of actions written.
    pub turns: u64,
    pub evasions: u64,
}

/// Play one game over `input`/`output`.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: &BotConfig,
) -> Result<SessionSummary, ProtocolError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, danger_radius = config.danger_radius, horizon = config.horizon_turns, "session starting");

    let mut reader = MessageReader::new(input);
    let mut writer = ActionWriter::new(output);
    let mut decider = Decider::new(config, seed);
    let mut summary = SessionSummary {
        seed,
        turns: 0,
        evasions: 0,
    };

    // 1. Handshake
    let handshake = match reader.next_message()? {
        EngineMessage::Handshake(h) => h,
        EngineMessage::End => {
            warn!("input ended before the handshake");
            return Ok(summary);
        }
        other => {
            return Err(ProtocolError::Unexpected {
                expecting: "awaiting the handshake",
                found: message_kind(&other),
            })
        }
    };
    let mut world = WorldModel::new(handshake);

    // 2. Initial world state
    loop {
        match reader.next_message()? {
            EngineMessage::Delta(delta) => world.apply_init(delta),
            EngineMessage::EndInit => break,
            EngineMessage::End => {
                warn!("input ended during the initial world state");
                return Ok(summary);
            }
            other => {
                return Err(ProtocolError::Unexpected {
                    expecting: "reading the initial world state",
                    found: message_kind(&other),
                })
            }
        }
    }
    world.finish_init();
    info!(objects = world.len(), "initial world state loaded");

    // 3. Turns
    loop {
        match reader.next_message()? {
            EngineMessage::Delta(delta) => {
                world.apply_turn(delta);
                let ranking = assess(&world.threat_picture()).unwrap_or_else(|err| {
                    debug!(turn = world.turn(), %err, "no threat ranking this turn");
                    Vec::new()
                });
                let action = decider.decide(&world, &ranking);
                debug!(turn = world.turn(), threats = ranking.len(), ?action, "turn decided");
                writer.send(&action)?;
                summary.turns += 1;
            }
            EngineMessage::End => break,
            other => {
                return Err(ProtocolError::Unexpected {
                    expecting: "playing turns",
                    found: message_kind(&other),
                })
            }
        }
    }

    summary.evasions = decider.evasions();
    info!(turns = summary.turns, evasions = summary.evasions, "game over");
    Ok(summary)
}
