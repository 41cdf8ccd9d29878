use super::plan::Plan;
use crate::types::{BombMove, StoneMove};
use std::fmt;
use std::io::{self, Write};

/// One engine call, ready for substitution into the client's arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    DropBomb { player: String, target: BombMove },
    DropStone { player: String, stone: StoneMove },
}

impl EngineCommand {
    pub fn subcommand(&self) -> &'static str {
        match self {
            EngineCommand::DropBomb { .. } => "drop-bomb",
            EngineCommand::DropStone { .. } => "drop-stone",
        }
    }

    pub fn player(&self) -> &str {
        match self {
            EngineCommand::DropBomb { player, .. } | EngineCommand::DropStone { player, .. } => {
                player
            }
        }
    }

    /// Player followed by the move's own arguments
    pub fn args(&self) -> Vec<String> {
        let [a, b] = match self {
            EngineCommand::DropBomb { target, .. } => target.args(),
            EngineCommand::DropStone { stone, .. } => stone.args(),
        };
        vec![self.player().to_string(), a, b]
    }
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subcommand(), self.args().join(" "))
    }
}

impl Plan {
    /// Commands in issue order.
    ///
    /// Both players drop the shared bombs, player 1 first. Stones then go
    /// turn by turn with player 2 moving before player 1. A player without a
    /// lane simply sits out the stone turns.
    pub fn commands(&self) -> Vec<EngineCommand> {
        let players = self.stones.players();
        let mut commands = Vec::new();

        for player in players {
            commands.extend(self.bombs.iter().map(|&target| EngineCommand::DropBomb {
                player: player.to_string(),
                target,
            }));
        }

        let orders = [self.stones.orders(0), self.stones.orders(1)];
        let turns = orders.iter().map(Vec::len).max().unwrap_or(0);
        for turn in 0..turns {
            for slot in [1, 0] {
                if let Some(&stone) = orders[slot].get(turn) {
                    commands.push(EngineCommand::DropStone {
                        player: players[slot].to_string(),
                        stone,
                    });
                }
            }
        }

        commands
    }

    /// Write one command per line and flush
    pub fn write_commands<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for command in self.commands() {
            writeln!(out, "{}", command)?;
        }
        out.flush()
    }
}
