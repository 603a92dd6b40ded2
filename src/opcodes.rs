//! Per-opcode metadata for the base and CB-prefixed instruction sets.
//!
//! The tables document byte length and cycle cost; the CPU charges the table
//! cost for every executed instruction, adding `extra` when a conditional
//! branch is taken. Entries are `None` for the eleven unassigned base
//! opcodes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub mnemonic: &'static str,
    pub bytes: u8,
    /// Cycle cost in T-cycles; for conditional control flow, the not-taken
    /// cost.
    pub cycles: u8,
    /// Additional T-cycles charged when a conditional branch is taken.
    pub extra: u8,
}

const fn op(mnemonic: &'static str, bytes: u8, cycles: u8) -> Option<Opcode> {
    Some(Opcode {
        mnemonic,
        bytes,
        cycles,
        extra: 0,
    })
}

const fn br(mnemonic: &'static str, bytes: u8, cycles: u8, extra: u8) -> Option<Opcode> {
    Some(Opcode {
        mnemonic,
        bytes,
        cycles,
        extra,
    })
}

const fn cb(mnemonic: &'static str, cycles: u8) -> Opcode {
    Opcode {
        mnemonic,
        bytes: 2,
        cycles,
        extra: 0,
    }
}

/// Base instruction set, 0x00-0xFF.
pub static BASE: [Option<Opcode>; 256] = [
    op("NOP", 1, 4),            // 00
    op("LD BC, d16", 3, 12),    // 01
    op("LD (BC), A", 1, 8),     // 02
    op("INC BC", 1, 8),         // 03
    op("INC B", 1, 4),          // 04
    op("DEC B", 1, 4),          // 05
    op("LD B, d8", 2, 8),       // 06
    op("RLCA", 1, 4),           // 07
    op("LD (a16), SP", 3, 20),  // 08
    op("ADD HL, BC", 1, 8),     // 09
    op("LD A, (BC)", 1, 8),     // 0A
    op("DEC BC", 1, 8),         // 0B
    op("INC C", 1, 4),          // 0C
    op("DEC C", 1, 4),          // 0D
    op("LD C, d8", 2, 8),       // 0E
    op("RRCA", 1, 4),           // 0F
    op("STOP", 2, 4),           // 10
    op("LD DE, d16", 3, 12),    // 11
    op("LD (DE), A", 1, 8),     // 12
    op("INC DE", 1, 8),         // 13
    op("INC D", 1, 4),          // 14
    op("DEC D", 1, 4),          // 15
    op("LD D, d8", 2, 8),       // 16
    op("RLA", 1, 4),            // 17
    op("JR r8", 2, 12),         // 18
    op("ADD HL, DE", 1, 8),     // 19
    op("LD A, (DE)", 1, 8),     // 1A
    op("DEC DE", 1, 8),         // 1B
    op("INC E", 1, 4),          // 1C
    op("DEC E", 1, 4),          // 1D
    op("LD E, d8", 2, 8),       // 1E
    op("RRA", 1, 4),            // 1F
    br("JR NZ, r8", 2, 8, 4),   // 20
    op("LD HL, d16", 3, 12),    // 21
    op("LD (HL+), A", 1, 8),    // 22
    op("INC HL", 1, 8),         // 23
    op("INC H", 1, 4),          // 24
    op("DEC H", 1, 4),          // 25
    op("LD H, d8", 2, 8),       // 26
    op("DAA", 1, 4),            // 27
    br("JR Z, r8", 2, 8, 4),    // 28
    op("ADD HL, HL", 1, 8),     // 29
    op("LD A, (HL+)", 1, 8),    // 2A
    op("DEC HL", 1, 8),         // 2B
    op("INC L", 1, 4),          // 2C
    op("DEC L", 1, 4),          // 2D
    op("LD L, d8", 2, 8),       // 2E
    op("CPL", 1, 4),            // 2F
    br("JR NC, r8", 2, 8, 4),   // 30
    op("LD SP, d16", 3, 12),    // 31
    op("LD (HL-), A", 1, 8),    // 32
    op("INC SP", 1, 8),         // 33
    op("INC (HL)", 1, 12),      // 34
    op("DEC (HL)", 1, 12),      // 35
    op("LD (HL), d8", 2, 12),   // 36
    op("SCF", 1, 4),            // 37
    br("JR C, r8", 2, 8, 4),    // 38
    op("ADD HL, SP", 1, 8),     // 39
    op("LD A, (HL-)", 1, 8),    // 3A
    op("DEC SP", 1, 8),         // 3B
    op("INC A", 1, 4),          // 3C
    op("DEC A", 1, 4),          // 3D
    op("LD A, d8", 2, 8),       // 3E
    op("CCF", 1, 4),            // 3F
    op("LD B, B", 1, 4),        // 40
    op("LD B, C", 1, 4),        // 41
    op("LD B, D", 1, 4),        // 42
    op("LD B, E", 1, 4),        // 43
    op("LD B, H", 1, 4),        // 44
    op("LD B, L", 1, 4),        // 45
    op("LD B, (HL)", 1, 8),     // 46
    op("LD B, A", 1, 4),        // 47
    op("LD C, B", 1, 4),        // 48
    op("LD C, C", 1, 4),        // 49
    op("LD C, D", 1, 4),        // 4A
    op("LD C, E", 1, 4),        // 4B
    op("LD C, H", 1, 4),        // 4C
    op("LD C, L", 1, 4),        // 4D
    op("LD C, (HL)", 1, 8),     // 4E
    op("LD C, A", 1, 4),        // 4F
    op("LD D, B", 1, 4),        // 50
    op("LD D, C", 1, 4),        // 51
    op("LD D, D", 1, 4),        // 52
    op("LD D, E", 1, 4),        // 53
    op("LD D, H", 1, 4),        // 54
    op("LD D, L", 1, 4),        // 55
    op("LD D, (HL)", 1, 8),     // 56
    op("LD D, A", 1, 4),        // 57
    op("LD E, B", 1, 4),        // 58
    op("LD E, C", 1, 4),        // 59
    op("LD E, D", 1, 4),        // 5A
    op("LD E, E", 1, 4),        // 5B
    op("LD E, H", 1, 4),        // 5C
    op("LD E, L", 1, 4),        // 5D
    op("LD E, (HL)", 1, 8),     // 5E
    op("LD E, A", 1, 4),        // 5F
    op("LD H, B", 1, 4),        // 60
    op("LD H, C", 1, 4),        // 61
    op("LD H, D", 1, 4),        // 62
    op("LD H, E", 1, 4),        // 63
    op("LD H, H", 1, 4),        // 64
    op("LD H, L", 1, 4),        // 65
    op("LD H, (HL)", 1, 8),     // 66
    op("LD H, A", 1, 4),        // 67
    op("LD L, B", 1, 4),        // 68
    op("LD L, C", 1, 4),        // 69
    op("LD L, D", 1, 4),        // 6A
    op("LD L, E", 1, 4),        // 6B
    op("LD L, H", 1, 4),        // 6C
    op("LD L, L", 1, 4),        // 6D
    op("LD L, (HL)", 1, 8),     // 6E
    op("LD L, A", 1, 4),        // 6F
    op("LD (HL), B", 1, 8),     // 70
    op("LD (HL), C", 1, 8),     // 71
    op("LD (HL), D", 1, 8),     // 72
    op("LD (HL), E", 1, 8),     // 73
    op("LD (HL), H", 1, 8),     // 74
    op("LD (HL), L", 1, 8),     // 75
    op("HALT", 1, 4),           // 76
    op("LD (HL), A", 1, 8),     // 77
    op("LD A, B", 1, 4),        // 78
    op("LD A, C", 1, 4),        // 79
    op("LD A, D", 1, 4),        // 7A
    op("LD A, E", 1, 4),        // 7B
    op("LD A, H", 1, 4),        // 7C
    op("LD A, L", 1, 4),        // 7D
    op("LD A, (HL)", 1, 8),     // 7E
    op("LD A, A", 1, 4),        // 7F
    op("ADD A, B", 1, 4),       // 80
    op("ADD A, C", 1, 4),       // 81
    op("ADD A, D", 1, 4),       // 82
    op("ADD A, E", 1, 4),       // 83
    op("ADD A, H", 1, 4),       // 84
    op("ADD A, L", 1, 4),       // 85
    op("ADD A, (HL)", 1, 8),    // 86
    op("ADD A, A", 1, 4),       // 87
    op("ADC A, B", 1, 4),       // 88
    op("ADC A, C", 1, 4),       // 89
    op("ADC A, D", 1, 4),       // 8A
    op("ADC A, E", 1, 4),       // 8B
    op("ADC A, H", 1, 4),       // 8C
    op("ADC A, L", 1, 4),       // 8D
    op("ADC A, (HL)", 1, 8),    // 8E
    op("ADC A, A", 1, 4),       // 8F
    op("SUB B", 1, 4),          // 90
    op("SUB C", 1, 4),          // 91
    op("SUB D", 1, 4),          // 92
    op("SUB E", 1, 4),          // 93
    op("SUB H", 1, 4),          // 94
    op("SUB L", 1, 4),          // 95
    op("SUB (HL)", 1, 8),       // 96
    op("SUB A", 1, 4),          // 97
    op("SBC A, B", 1, 4),       // 98
    op("SBC A, C", 1, 4),       // 99
    op("SBC A, D", 1, 4),       // 9A
    op("SBC A, E", 1, 4),       // 9B
    op("SBC A, H", 1, 4),       // 9C
    op("SBC A, L", 1, 4),       // 9D
    op("SBC A, (HL)", 1, 8),    // 9E
    op("SBC A, A", 1, 4),       // 9F
    op("AND B", 1, 4),          // A0
    op("AND C", 1, 4),          // A1
    op("AND D", 1, 4),          // A2
    op("AND E", 1, 4),          // A3
    op("AND H", 1, 4),          // A4
    op("AND L", 1, 4),          // A5
    op("AND (HL)", 1, 8),       // A6
    op("AND A", 1, 4),          // A7
    op("XOR B", 1, 4),          // A8
    op("XOR C", 1, 4),          // A9
    op("XOR D", 1, 4),          // AA
    op("XOR E", 1, 4),          // AB
    op("XOR H", 1, 4),          // AC
    op("XOR L", 1, 4),          // AD
    op("XOR (HL)", 1, 8),       // AE
    op("XOR A", 1, 4),          // AF
    op("OR B", 1, 4),           // B0
    op("OR C", 1, 4),           // B1
    op("OR D", 1, 4),           // B2
    op("OR E", 1, 4),           // B3
    op("OR H", 1, 4),           // B4
    op("OR L", 1, 4),           // B5
    op("OR (HL)", 1, 8),        // B6
    op("OR A", 1, 4),           // B7
    op("CP B", 1, 4),           // B8
    op("CP C", 1, 4),           // B9
    op("CP D", 1, 4),           // BA
    op("CP E", 1, 4),           // BB
    op("CP H", 1, 4),           // BC
    op("CP L", 1, 4),           // BD
    op("CP (HL)", 1, 8),        // BE
    op("CP A", 1, 4),           // BF
    br("RET NZ", 1, 8, 12),     // C0
    op("POP BC", 1, 12),        // C1
    br("JP NZ, a16", 3, 12, 4), // C2
    op("JP a16", 3, 16),        // C3
    br("CALL NZ, a16", 3, 12, 12), // C4
    op("PUSH BC", 1, 16),       // C5
    op("ADD A, d8", 2, 8),      // C6
    op("RST 00H", 1, 16),       // C7
    br("RET Z", 1, 8, 12),      // C8
    op("RET", 1, 16),           // C9
    br("JP Z, a16", 3, 12, 4),  // CA
    op("PREFIX CB", 1, 4),      // CB
    br("CALL Z, a16", 3, 12, 12), // CC
    op("CALL a16", 3, 24),      // CD
    op("ADC A, d8", 2, 8),      // CE
    op("RST 08H", 1, 16),       // CF
    br("RET NC", 1, 8, 12),     // D0
    op("POP DE", 1, 12),        // D1
    br("JP NC, a16", 3, 12, 4), // D2
    None,                       // D3
    br("CALL NC, a16", 3, 12, 12), // D4
    op("PUSH DE", 1, 16),       // D5
    op("SUB d8", 2, 8),         // D6
    op("RST 10H", 1, 16),       // D7
    br("RET C", 1, 8, 12),      // D8
    op("RETI", 1, 16),          // D9
    br("JP C, a16", 3, 12, 4),  // DA
    None,                       // DB
    br("CALL C, a16", 3, 12, 12), // DC
    None,                       // DD
    op("SBC A, d8", 2, 8),      // DE
    op("RST 18H", 1, 16),       // DF
    op("LDH (a8), A", 2, 12),   // E0
    op("POP HL", 1, 12),        // E1
    op("LD (C), A", 1, 8),      // E2
    None,                       // E3
    None,                       // E4
    op("PUSH HL", 1, 16),       // E5
    op("AND d8", 2, 8),         // E6
    op("RST 20H", 1, 16),       // E7
    op("ADD SP, r8", 2, 16),    // E8
    op("JP HL", 1, 4),          // E9
    op("LD (a16), A", 3, 16),   // EA
    None,                       // EB
    None,                       // EC
    None,                       // ED
    op("XOR d8", 2, 8),         // EE
    op("RST 28H", 1, 16),       // EF
    op("LDH A, (a8)", 2, 12),   // F0
    op("POP AF", 1, 12),        // F1
    op("LD A, (C)", 1, 8),      // F2
    op("DI", 1, 4),             // F3
    None,                       // F4
    op("PUSH AF", 1, 16),       // F5
    op("OR d8", 2, 8),          // F6
    op("RST 30H", 1, 16),       // F7
    op("LD HL, SP + r8", 2, 12), // F8
    op("LD SP, HL", 1, 8),      // F9
    op("LD A, (a16)", 3, 16),   // FA
    op("EI", 1, 4),             // FB
    None,                       // FC
    None,                       // FD
    op("CP d8", 2, 8),          // FE
    op("RST 38H", 1, 16),       // FF
];

/// CB-prefixed instruction set, selected by the byte following 0xCB. Byte
/// lengths and cycle costs include the prefix.
pub static EXTENDED: [Opcode; 256] = [
    cb("RLC B", 8),      // 00
    cb("RLC C", 8),      // 01
    cb("RLC D", 8),      // 02
    cb("RLC E", 8),      // 03
    cb("RLC H", 8),      // 04
    cb("RLC L", 8),      // 05
    cb("RLC (HL)", 16),  // 06
    cb("RLC A", 8),      // 07
    cb("RRC B", 8),      // 08
    cb("RRC C", 8),      // 09
    cb("RRC D", 8),      // 0A
    cb("RRC E", 8),      // 0B
    cb("RRC H", 8),      // 0C
    cb("RRC L", 8),      // 0D
    cb("RRC (HL)", 16),  // 0E
    cb("RRC A", 8),      // 0F
    cb("RL B", 8),       // 10
    cb("RL C", 8),       // 11
    cb("RL D", 8),       // 12
    cb("RL E", 8),       // 13
    cb("RL H", 8),       // 14
    cb("RL L", 8),       // 15
    cb("RL (HL)", 16),   // 16
    cb("RL A", 8),       // 17
    cb("RR B", 8),       // 18
    cb("RR C", 8),       // 19
    cb("RR D", 8),       // 1A
    cb("RR E", 8),       // 1B
    cb("RR H", 8),       // 1C
    cb("RR L", 8),       // 1D
    cb("RR (HL)", 16),   // 1E
    cb("RR A", 8),       // 1F
    cb("SLA B", 8),      // 20
    cb("SLA C", 8),      // 21
    cb("SLA D", 8),      // 22
    cb("SLA E", 8),      // 23
    cb("SLA H", 8),      // 24
    cb("SLA L", 8),      // 25
    cb("SLA (HL)", 16),  // 26
    cb("SLA A", 8),      // 27
    cb("SRA B", 8),      // 28
    cb("SRA C", 8),      // 29
    cb("SRA D", 8),      // 2A
    cb("SRA E", 8),      // 2B
    cb("SRA H", 8),      // 2C
    cb("SRA L", 8),      // 2D
    cb("SRA (HL)", 16),  // 2E
    cb("SRA A", 8),      // 2F
    cb("SWAP B", 8),     // 30
    cb("SWAP C", 8),     // 31
    cb("SWAP D", 8),     // 32
    cb("SWAP E", 8),     // 33
    cb("SWAP H", 8),     // 34
    cb("SWAP L", 8),     // 35
    cb("SWAP (HL)", 16), // 36
    cb("SWAP A", 8),     // 37
    cb("SRL B", 8),      // 38
    cb("SRL C", 8),      // 39
    cb("SRL D", 8),      // 3A
    cb("SRL E", 8),      // 3B
    cb("SRL H", 8),      // 3C
    cb("SRL L", 8),      // 3D
    cb("SRL (HL)", 16),  // 3E
    cb("SRL A", 8),      // 3F
    cb("BIT 0, B", 8),   // 40
    cb("BIT 0, C", 8),   // 41
    cb("BIT 0, D", 8),   // 42
    cb("BIT 0, E", 8),   // 43
    cb("BIT 0, H", 8),   // 44
    cb("BIT 0, L", 8),   // 45
    cb("BIT 0, (HL)", 12), // 46
    cb("BIT 0, A", 8),   // 47
    cb("BIT 1, B", 8),   // 48
    cb("BIT 1, C", 8),   // 49
    cb("BIT 1, D", 8),   // 4A
    cb("BIT 1, E", 8),   // 4B
    cb("BIT 1, H", 8),   // 4C
    cb("BIT 1, L", 8),   // 4D
    cb("BIT 1, (HL)", 12), // 4E
    cb("BIT 1, A", 8),   // 4F
    cb("BIT 2, B", 8),   // 50
    cb("BIT 2, C", 8),   // 51
    cb("BIT 2, D", 8),   // 52
    cb("BIT 2, E", 8),   // 53
    cb("BIT 2, H", 8),   // 54
    cb("BIT 2, L", 8),   // 55
    cb("BIT 2, (HL)", 12), // 56
    cb("BIT 2, A", 8),   // 57
    cb("BIT 3, B", 8),   // 58
    cb("BIT 3, C", 8),   // 59
    cb("BIT 3, D", 8),   // 5A
    cb("BIT 3, E", 8),   // 5B
    cb("BIT 3, H", 8),   // 5C
    cb("BIT 3, L", 8),   // 5D
    cb("BIT 3, (HL)", 12), // 5E
    cb("BIT 3, A", 8),   // 5F
    cb("BIT 4, B", 8),   // 60
    cb("BIT 4, C", 8),   // 61
    cb("BIT 4, D", 8),   // 62
    cb("BIT 4, E", 8),   // 63
    cb("BIT 4, H", 8),   // 64
    cb("BIT 4, L", 8),   // 65
    cb("BIT 4, (HL)", 12), // 66
    cb("BIT 4, A", 8),   // 67
    cb("BIT 5, B", 8),   // 68
    cb("BIT 5, C", 8),   // 69
    cb("BIT 5, D", 8),   // 6A
    cb("BIT 5, E", 8),   // 6B
    cb("BIT 5, H", 8),   // 6C
    cb("BIT 5, L", 8),   // 6D
    cb("BIT 5, (HL)", 12), // 6E
    cb("BIT 5, A", 8),   // 6F
    cb("BIT 6, B", 8),   // 70
    cb("BIT 6, C", 8),   // 71
    cb("BIT 6, D", 8),   // 72
    cb("BIT 6, E", 8),   // 73
    cb("BIT 6, H", 8),   // 74
    cb("BIT 6, L", 8),   // 75
    cb("BIT 6, (HL)", 12), // 76
    cb("BIT 6, A", 8),   // 77
    cb("BIT 7, B", 8),   // 78
    cb("BIT 7, C", 8),   // 79
    cb("BIT 7, D", 8),   // 7A
    cb("BIT 7, E", 8),   // 7B
    cb("BIT 7, H", 8),   // 7C
    cb("BIT 7, L", 8),   // 7D
    cb("BIT 7, (HL)", 12), // 7E
    cb("BIT 7, A", 8),   // 7F
    cb("RES 0, B", 8),   // 80
    cb("RES 0, C", 8),   // 81
    cb("RES 0, D", 8),   // 82
    cb("RES 0, E", 8),   // 83
    cb("RES 0, H", 8),   // 84
    cb("RES 0, L", 8),   // 85
    cb("RES 0, (HL)", 16), // 86
    cb("RES 0, A", 8),   // 87
    cb("RES 1, B", 8),   // 88
    cb("RES 1, C", 8),   // 89
    cb("RES 1, D", 8),   // 8A
    cb("RES 1, E", 8),   // 8B
    cb("RES 1, H", 8),   // 8C
    cb("RES 1, L", 8),   // 8D
    cb("RES 1, (HL)", 16), // 8E
    cb("RES 1, A", 8),   // 8F
    cb("RES 2, B", 8),   // 90
    cb("RES 2, C", 8),   // 91
    cb("RES 2, D", 8),   // 92
    cb("RES 2, E", 8),   // 93
    cb("RES 2, H", 8),   // 94
    cb("RES 2, L", 8),   // 95
    cb("RES 2, (HL)", 16), // 96
    cb("RES 2, A", 8),   // 97
    cb("RES 3, B", 8),   // 98
    cb("RES 3, C", 8),   // 99
    cb("RES 3, D", 8),   // 9A
    cb("RES 3, E", 8),   // 9B
    cb("RES 3, H", 8),   // 9C
    cb("RES 3, L", 8),   // 9D
    cb("RES 3, (HL)", 16), // 9E
    cb("RES 3, A", 8),   // 9F
    cb("RES 4, B", 8),   // A0
    cb("RES 4, C", 8),   // A1
    cb("RES 4, D", 8),   // A2
    cb("RES 4, E", 8),   // A3
    cb("RES 4, H", 8),   // A4
    cb("RES 4, L", 8),   // A5
    cb("RES 4, (HL)", 16), // A6
    cb("RES 4, A", 8),   // A7
    cb("RES 5, B", 8),   // A8
    cb("RES 5, C", 8),   // A9
    cb("RES 5, D", 8),   // AA
    cb("RES 5, E", 8),   // AB
    cb("RES 5, H", 8),   // AC
    cb("RES 5, L", 8),   // AD
    cb("RES 5, (HL)", 16), // AE
    cb("RES 5, A", 8),   // AF
    cb("RES 6, B", 8),   // B0
    cb("RES 6, C", 8),   // B1
    cb("RES 6, D", 8),   // B2
    cb("RES 6, E", 8),   // B3
    cb("RES 6, H", 8),   // B4
    cb("RES 6, L", 8),   // B5
    cb("RES 6, (HL)", 16), // B6
    cb("RES 6, A", 8),   // B7
    cb("RES 7, B", 8),   // B8
    cb("RES 7, C", 8),   // B9
    cb("RES 7, D", 8),   // BA
    cb("RES 7, E", 8),   // BB
    cb("RES 7, H", 8),   // BC
    cb("RES 7, L", 8),   // BD
    cb("RES 7, (HL)", 16), // BE
    cb("RES 7, A", 8),   // BF
    cb("SET 0, B", 8),   // C0
    cb("SET 0, C", 8),   // C1
    cb("SET 0, D", 8),   // C2
    cb("SET 0, E", 8),   // C3
    cb("SET 0, H", 8),   // C4
    cb("SET 0, L", 8),   // C5
    cb("SET 0, (HL)", 16), // C6
    cb("SET 0, A", 8),   // C7
    cb("SET 1, B", 8),   // C8
    cb("SET 1, C", 8),   // C9
    cb("SET 1, D", 8),   // CA
    cb("SET 1, E", 8),   // CB
    cb("SET 1, H", 8),   // CC
    cb("SET 1, L", 8),   // CD
    cb("SET 1, (HL)", 16), // CE
    cb("SET 1, A", 8),   // CF
    cb("SET 2, B", 8),   // D0
    cb("SET 2, C", 8),   // D1
    cb("SET 2, D", 8),   // D2
    cb("SET 2, E", 8),   // D3
    cb("SET 2, H", 8),   // D4
    cb("SET 2, L", 8),   // D5
    cb("SET 2, (HL)", 16), // D6
    cb("SET 2, A", 8),   // D7
    cb("SET 3, B", 8),   // D8
    cb("SET 3, C", 8),   // D9
    cb("SET 3, D", 8),   // DA
    cb("SET 3, E", 8),   // DB
    cb("SET 3, H", 8),   // DC
    cb("SET 3, L", 8),   // DD
    cb("SET 3, (HL)", 16), // DE
    cb("SET 3, A", 8),   // DF
    cb("SET 4, B", 8),   // E0
    cb("SET 4, C", 8),   // E1
    cb("SET 4, D", 8),   // E2
    cb("SET 4, E", 8),   // E3
    cb("SET 4, H", 8),   // E4
    cb("SET 4, L", 8),   // E5
    cb("SET 4, (HL)", 16), // E6
    cb("SET 4, A", 8),   // E7
    cb("SET 5, B", 8),   // E8
    cb("SET 5, C", 8),   // E9
    cb("SET 5, D", 8),   // EA
    cb("SET 5, E", 8),   // EB
    cb("SET 5, H", 8),   // EC
    cb("SET 5, L", 8),   // ED
    cb("SET 5, (HL)", 16), // EE
    cb("SET 5, A", 8),   // EF
    cb("SET 6, B", 8),   // F0
    cb("SET 6, C", 8),   // F1
    cb("SET 6, D", 8),   // F2
    cb("SET 6, E", 8),   // F3
    cb("SET 6, H", 8),   // F4
    cb("SET 6, L", 8),   // F5
    cb("SET 6, (HL)", 16), // F6
    cb("SET 6, A", 8),   // F7
    cb("SET 7, B", 8),   // F8
    cb("SET 7, C", 8),   // F9
    cb("SET 7, D", 8),   // FA
    cb("SET 7, E", 8),   // FB
    cb("SET 7, H", 8),   // FC
    cb("SET 7, L", 8),   // FD
    cb("SET 7, (HL)", 16), // FE
    cb("SET 7, A", 8),   // FF
];
