use crate::game_state::chess_types::Alliance;
use crate::game_state::position::Position;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move() {
        Alliance::White => "w",
        Alliance::Black => "b",
    };
    let castling = generate_castling_field(position);
    let en_passant = generate_en_passant_field(position);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        position.halfmove_clock(),
        position.fullmove_number()
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for column in 0..8u8 {
            match position.tile_at(row * 8 + column) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(position: &Position) -> String {
    let white = position.white_player();
    let black = position.black_player();
    let mut out = String::new();

    if white.is_king_side_castle_capable() {
        out.push('K');
    }
    if white.is_queen_side_castle_capable() {
        out.push('Q');
    }
    if black.is_king_side_castle_capable() {
        out.push('k');
    }
    if black.is_queen_side_castle_capable() {
        out.push('q');
    }

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

/// The square the en-passant pawn jumped over.
fn generate_en_passant_field(position: &Position) -> String {
    position
        .en_passant_pawn()
        .and_then(|pawn| {
            let behind = i16::from(pawn.square()) - i16::from(pawn.alliance().forward_offset());
            u8::try_from(behind).ok()
        })
        .and_then(|square| square_to_algebraic(square).ok())
        .unwrap_or_else(|| "-".to_owned())
}
