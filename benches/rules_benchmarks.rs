//! Benchmarks for the rules engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::board::{movegen, FenData};
use chess_rules::MatchState;

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let start = FenData::initial();
    group.bench_function("startpos", |b| {
        b.iter(|| {
            black_box(movegen::generate_legal(
                &start.board,
                start.active,
                start.castling,
                start.en_passant,
            ))
        })
    });

    let kiwipete = FenData::decode(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    group.bench_function("kiwipete", |b| {
        b.iter(|| {
            black_box(movegen::generate_legal(
                &kiwipete.board,
                kiwipete.active,
                kiwipete.castling,
                kiwipete.en_passant,
            ))
        })
    });

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    group.bench_function("decode", |b| {
        b.iter(|| black_box(FenData::decode(black_box(fen)).unwrap()))
    });

    let data = FenData::decode(fen).unwrap();
    group.bench_function("encode", |b| b.iter(|| black_box(data.encode())));

    group.finish();
}

fn bench_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition");

    let state = MatchState::new("bench");
    let opening = state.legal_moves();
    group.bench_function("apply_move", |b| {
        b.iter(|| black_box(state.apply_move(&opening[0]).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_codec, bench_transition);
criterion_main!(benches);
