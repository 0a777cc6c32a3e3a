use crate::errors::ActionError;
use crate::player::{Action, Player};

/// An action with its chip movement fully resolved against the table state.
/// Short calls and capped raises have already been converted to all-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Match the table bet, paying `pay` (short when `all_in`).
    Call { pay: u32, all_in: bool },
    /// Bring this player's round bet to `to`, paying `pay`. Whether the
    /// table bet moves is decided by the state machine (`to` can sit below
    /// the table bet for a short all-in).
    Raise { to: u32, pay: u32, all_in: bool },
}

/// Validate one action for the player whose turn it is.
///
/// Eligibility (folded / all-in / chip-less) is checked first, then the
/// action-specific legality rules:
///
/// - `Check` requires nothing to call.
/// - `Call` converts to an all-in for the whole stack when it cannot cover
///   the table bet.
/// - `Raise(to)` is "raise **to**": it must exceed the player's own round
///   commitment, is clamped to the stack, and must reach the table bet plus
///   the minimum raise unless the clamped amount is the player's entire
///   stack.
/// - `AllIn` always commits the full stack and resolves to a raise or a
///   call depending on whether it beats the table bet.
///
/// No state is touched here; the caller applies the returned effect.
///
/// # Examples
///
/// ```
/// use felt_engine::player::{Action, Player};
/// use felt_engine::rules::{validate_action, ValidatedAction};
///
/// let player = Player::new("p1", "Alice", 30, 0);
/// // Facing a bet of 50 with only 30 behind: automatic all-in call.
/// let validated = validate_action(&player, 50, 20, Action::Call);
/// assert_eq!(validated, Ok(ValidatedAction::Call { pay: 30, all_in: true }));
/// ```
pub fn validate_action(
    player: &Player,
    table_bet: u32,
    minimum_raise: u32,
    action: Action,
) -> Result<ValidatedAction, ActionError> {
    if !player.is_active() {
        return Err(ActionError::AlreadyFolded {
            player_id: player.id().to_string(),
        });
    }
    if player.is_all_in() {
        return Err(ActionError::AlreadyAllIn {
            player_id: player.id().to_string(),
        });
    }
    if player.chips() == 0 && action != Action::Fold {
        return Err(ActionError::NoChipsRemaining {
            player_id: player.id().to_string(),
        });
    }

    let committed = player.current_bet();
    let to_call = table_bet.saturating_sub(committed);

    match action {
        Action::Fold => Ok(ValidatedAction::Fold),
        Action::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(ActionError::CannotCheckFacingBet { to_call })
            }
        }
        Action::Call => {
            let pay = to_call.min(player.chips());
            Ok(ValidatedAction::Call {
                pay,
                all_in: pay == player.chips(),
            })
        }
        Action::Raise(to) => {
            if to <= committed {
                return Err(ActionError::RaiseMustExceedCurrentBet { to, committed });
            }
            let max_affordable = committed + player.chips();
            let to = to.min(max_affordable);
            let minimum_legal_to = table_bet + minimum_raise;
            // Short of the minimum is only legal as a full all-in.
            if to < minimum_legal_to && to < max_affordable {
                return Err(ActionError::RaiseBelowMinimum {
                    to,
                    minimum: minimum_legal_to,
                });
            }
            let pay = to - committed;
            Ok(ValidatedAction::Raise {
                to,
                pay,
                all_in: pay == player.chips(),
            })
        }
        Action::AllIn => {
            let stack = player.chips();
            let to = committed + stack;
            if to > table_bet {
                Ok(ValidatedAction::Raise {
                    to,
                    pay: stack,
                    all_in: true,
                })
            } else {
                Ok(ValidatedAction::Call {
                    pay: stack,
                    all_in: true,
                })
            }
        }
    }
}
