//! Handlers of every GTP command the engine understands.

use crate::error::GtpError;
use crate::registry::{Context, Registry, Reply};
use crate::rules::{self, final_result};
use itertools::Itertools;
use ninuki_ai::ai::AI;
use ninuki_field::{
  coords::{Vertex, format_point, parse_point},
  field::{Field, is_valid_size},
  player::Player,
  scan::check_neighbors,
};

pub const GAME_ID: &str = "Ninuki";

const ANALYZE_COMMANDS: &str = "pstring/Legal Moves For ToPlay/gogui-rules_legal_moves\n\
pstring/Side to Play/gogui-rules_side_to_move\n\
pstring/Final Result/gogui-rules_final_result\n\
pstring/Board Size/gogui-rules_board_size\n\
pstring/Rules GameID/gogui-rules_game_id\n\
pstring/Show Board/gogui-rules_board\n";

pub fn register_all<A: AI>(registry: &mut Registry<A>) {
  registry
    .register("protocol_version", protocol_version)
    .register("quit", quit)
    .register("name", name)
    .register_with_arity("boardsize", 1, "Usage: boardsize INT", boardsize)
    .register("showboard", showboard)
    .register("clear_board", clear_board)
    .register_with_arity("komi", 1, "Usage: komi FLOAT", komi)
    .register("version", version)
    .register_with_arity("known_command", 1, "Usage: known_command CMD_NAME", known_command)
    .register_with_arity("genmove", 1, "Usage: genmove {w,b}", genmove)
    .register("list_commands", list_commands)
    .register_with_arity("play", 2, "Usage: play {b,w} MOVE", play)
    .register_with_arity("legal_moves", 1, "Usage: legal_moves {w,b}", legal_moves)
    .register("gogui-rules_legal_moves", gogui_rules_legal_moves)
    .register("gogui-rules_final_result", gogui_rules_final_result)
    .register("gogui-rules_captured_count", gogui_rules_captured_count)
    .register("gogui-rules_game_id", gogui_rules_game_id)
    .register("gogui-rules_board_size", gogui_rules_board_size)
    .register("gogui-rules_side_to_move", gogui_rules_side_to_move)
    .register("gogui-rules_board", gogui_rules_board)
    .register("gogui-analyze_commands", gogui_analyze_commands)
    .register("gogui-captured_check_commands", gogui_captured_check_commands)
    .register("gogui-test", gogui_test)
    .register_with_arity(
      "gogui-check_neighbors",
      1,
      "Usage: gogui-check_neighbors POINT",
      gogui_check_neighbors,
    );
}

fn parse_player(arg: &str) -> Result<Player, GtpError> {
  arg
    .parse()
    .map_err(|_| GtpError::Syntax(format!("invalid color: '{}'", arg)))
}

/// Board with row numbers on the left and column letters underneath.
pub fn board_diagram(field: &Field) -> Result<String, GtpError> {
  let mut result = String::new();
  for row in (1..=field.size).rev() {
    result.push_str(&format!("{:>2}", row));
    for col in 1..=field.size {
      result.push(' ');
      result.push(field.cell(field.to_pos(row, col)).to_char());
    }
    result.push('\n');
  }
  result.push_str("  ");
  for col in 1..=field.size {
    let label = format_point(Vertex::Point { row: 1, col }).map_err(|e| GtpError::Fault(e.into()))?;
    result.push(' ');
    result.push_str(label.trim_end_matches(|c: char| c.is_ascii_digit()));
  }
  Ok(result)
}

fn protocol_version<A>(_: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok("2".into())
}

fn quit<A>(_: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(Reply::Quit)
}

fn name<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(ctx.engine.name.clone().into())
}

fn version<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(ctx.engine.version.clone().into())
}

fn boardsize<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  let size = ctx.args[0]
    .parse::<u32>()
    .ok()
    .filter(|&size| is_valid_size(size))
    .ok_or_else(|| GtpError::Syntax("unacceptable size".to_string()))?;
  ctx.engine.field.reset(size);
  Ok("".into())
}

fn showboard<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(format!("\n{}", board_diagram(&ctx.engine.field)?).into())
}

fn clear_board<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  let size = ctx.engine.field.size;
  ctx.engine.field.reset(size);
  Ok("".into())
}

fn komi<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  ctx.engine.komi = ctx.args[0]
    .parse()
    .map_err(|_| GtpError::Syntax("komi not a float".to_string()))?;
  Ok("".into())
}

fn known_command<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(if ctx.registry.contains(ctx.args[0]) { "true" } else { "false" }.into())
}

fn list_commands<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(ctx.registry.names().join(" ").into())
}

fn genmove<A: AI>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  let player = parse_player(ctx.args[0])?;
  let engine = ctx.engine;
  Ok(rules::generate_move(&mut engine.field, &mut engine.ai, player)?.into())
}

fn play<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  let player = parse_player(ctx.args[0])?;
  rules::play_move(&mut ctx.engine.field, player, ctx.args[1])?;
  Ok("".into())
}

fn legal_moves<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  let player = parse_player(ctx.args[0])?;
  Ok(rules::legal_moves(&ctx.engine.field, player)?.iter().join(" ").into())
}

fn gogui_rules_legal_moves<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  let field = &ctx.engine.field;
  Ok(rules::legal_moves(field, field.current_player)?.iter().join(" ").into())
}

fn gogui_rules_final_result<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(final_result(&ctx.engine.field).to_string().into())
}

/// Stones are never removed from the field, so both counts stay zero.
fn gogui_rules_captured_count<A>(_: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok("0 0".into())
}

fn gogui_rules_game_id<A>(_: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(GAME_ID.into())
}

fn gogui_rules_board_size<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(ctx.engine.field.size.to_string().into())
}

fn gogui_rules_side_to_move<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(ctx.engine.field.current_player.to_string().into())
}

fn gogui_rules_board<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(ctx.engine.field.to_string().into())
}

fn gogui_analyze_commands<A>(_: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(ANALYZE_COMMANDS.into())
}

fn gogui_captured_check_commands<A>(_: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok("".into())
}

fn gogui_test<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  Ok(ctx.args.join(" ").into())
}

fn gogui_check_neighbors<A>(ctx: Context<'_, A>) -> Result<Reply, GtpError> {
  let field = &ctx.engine.field;
  let Vertex::Point { row, col } = parse_point(ctx.args[0], field.size)? else {
    return Err(GtpError::Syntax("a pass has no neighbors".to_string()));
  };
  let report = check_neighbors(field, field.to_pos(row, col));
  for (direction, run) in &report.runs {
    log::debug!("{} of {}: {:?}", direction, ctx.args[0], run);
  }
  Ok(format!("captured_point: {}", report.total()).into())
}
