use dotmatrix_core::timer::Timer;

const DIV: u16 = 0xFF04;
const TIMA: u16 = 0xFF05;
const TMA: u16 = 0xFF06;
const TAC: u16 = 0xFF07;

#[test]
fn divider_increments_every_256_cycles() {
    let mut timer = Timer::new();
    let mut if_reg = 0;

    timer.step(255, &mut if_reg);
    assert_eq!(timer.read(DIV), 0);
    timer.step(1, &mut if_reg);
    assert_eq!(timer.read(DIV), 1);

    // The remainder carries; 256 more cycles in two uneven chunks.
    timer.step(100, &mut if_reg);
    timer.step(156, &mut if_reg);
    assert_eq!(timer.read(DIV), 2);
}

#[test]
fn divider_runs_with_counter_disabled() {
    let mut timer = Timer::new();
    let mut if_reg = 0;
    timer.write(TAC, 0x00);
    timer.step(512, &mut if_reg);
    assert!(timer.read(DIV) >= 1);
    assert_eq!(timer.read(TIMA), 0);
}

#[test]
fn div_write_resets_it() {
    let mut timer = Timer::new();
    let mut if_reg = 0;
    timer.step(256, &mut if_reg);
    assert_eq!(timer.read(DIV), 1);
    timer.write(DIV, 0xAB);
    assert_eq!(timer.read(DIV), 0);
}

#[test]
fn counter_rates_follow_tac() {
    for (select, rate) in [(0x00u8, 1024u32), (0x01, 16), (0x02, 64), (0x03, 256)] {
        let mut timer = Timer::new();
        let mut if_reg = 0;
        timer.write(TAC, 0x04 | select);

        timer.step(rate - 1, &mut if_reg);
        assert_eq!(timer.read(TIMA), 0, "select {select:02X}");
        timer.step(1, &mut if_reg);
        assert_eq!(timer.read(TIMA), 1, "select {select:02X}");
    }
}

#[test]
fn overflow_reloads_modulo_and_requests_interrupt() {
    let mut timer = Timer::new();
    let mut if_reg = 0;
    timer.write(TAC, 0x05); // enabled, 16-cycle rate
    timer.write(TMA, 0x23);
    timer.write(TIMA, 0xFF);

    timer.step(16, &mut if_reg);
    assert_eq!(timer.read(TIMA), 0x23);
    assert_ne!(if_reg & 0x04, 0, "timer interrupt requested");
}

#[test]
fn changing_the_rate_resets_the_phase() {
    let mut timer = Timer::new();
    let mut if_reg = 0;
    timer.write(TAC, 0x05); // 16-cycle rate
    timer.step(10, &mut if_reg); // partial period accumulated

    timer.write(TAC, 0x06); // 64-cycle rate: accumulator starts over
    timer.step(63, &mut if_reg);
    assert_eq!(timer.read(TIMA), 0);
    timer.step(1, &mut if_reg);
    assert_eq!(timer.read(TIMA), 1);
}

#[test]
fn rewriting_the_same_rate_keeps_the_phase() {
    let mut timer = Timer::new();
    let mut if_reg = 0;
    timer.write(TAC, 0x05);
    timer.step(10, &mut if_reg);
    timer.write(TAC, 0x05);
    timer.step(6, &mut if_reg);
    assert_eq!(timer.read(TIMA), 1);
}
