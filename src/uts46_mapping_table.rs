// Generated by make_uts46_mapping_table.py. Do not edit.
// Unicode version: 14.0.0 (Python unicodedata).

static TABLE: &[Range] = &[
    Range { from: '\u{0}', to: '\u{2c}', mapping: DisallowedStd3Valid },
    Range { from: '\u{2d}', to: '\u{2e}', mapping: Valid },
    Range { from: '\u{2f}', to: '\u{2f}', mapping: DisallowedStd3Valid },
    Range { from: '\u{30}', to: '\u{39}', mapping: Valid },
    Range { from: '\u{3a}', to: '\u{40}', mapping: DisallowedStd3Valid },
    Range { from: '\u{41}', to: '\u{41}', mapping: Mapped("\u{61}") },
    Range { from: '\u{42}', to: '\u{42}', mapping: Mapped("\u{62}") },
    Range { from: '\u{43}', to: '\u{43}', mapping: Mapped("\u{63}") },
    Range { from: '\u{44}', to: '\u{44}', mapping: Mapped("\u{64}") },
    Range { from: '\u{45}', to: '\u{45}', mapping: Mapped("\u{65}") },
    Range { from: '\u{46}', to: '\u{46}', mapping: Mapped("\u{66}") },
    Range { from: '\u{47}', to: '\u{47}', mapping: Mapped("\u{67}") },
    Range { from: '\u{48}', to: '\u{48}', mapping: Mapped("\u{68}") },
    Range { from: '\u{49}', to: '\u{49}', mapping: Mapped("\u{69}") },
    Range { from: '\u{4a}', to: '\u{4a}', mapping: Mapped("\u{6a}") },
    Range { from: '\u{4b}', to: '\u{4b}', mapping: Mapped("\u{6b}") },
    Range { from: '\u{4c}', to: '\u{4c}', mapping: Mapped("\u{6c}") },
    Range { from: '\u{4d}', to: '\u{4d}', mapping: Mapped("\u{6d}") },
    Range { from: '\u{4e}', to: '\u{4e}', mapping: Mapped("\u{6e}") },
    Range { from: '\u{4f}', to: '\u{4f}', mapping: Mapped("\u{6f}") },
    Range { from: '\u{50}', to: '\u{50}', mapping: Mapped("\u{70}") },
    Range { from: '\u{51}', to: '\u{51}', mapping: Mapped("\u{71}") },
    Range { from: '\u{52}', to: '\u{52}', mapping: Mapped("\u{72}") },
    Range { from: '\u{53}', to: '\u{53}', mapping: Mapped("\u{73}") },
    Range { from: '\u{54}', to: '\u{54}', mapping: Mapped("\u{74}") },
    Range { from: '\u{55}', to: '\u{55}', mapping: Mapped("\u{75}") },
    Range { from: '\u{56}', to: '\u{56}', mapping: Mapped("\u{76}") },
    Range { from: '\u{57}', to: '\u{57}', mapping: Mapped("\u{77}") },
    Range { from: '\u{58}', to: '\u{58}', mapping: Mapped("\u{78}") },
    Range { from: '\u{59}', to: '\u{59}', mapping: Mapped("\u{79}") },
    Range { from: '\u{5a}', to: '\u{5a}', mapping: Mapped("\u{7a}") },
    Range { from: '\u{5b}', to: '\u{60}', mapping: DisallowedStd3Valid },
    Range { from: '\u{61}', to: '\u{7a}', mapping: Valid },
    Range { from: '\u{7b}', to: '\u{7f}', mapping: DisallowedStd3Valid },
    Range { from: '\u{a0}', to: '\u{a0}', mapping: DisallowedStd3Mapped("\u{20}") },
    Range { from: '\u{a1}', to: '\u{a7}', mapping: Valid },
    Range { from: '\u{a8}', to: '\u{a8}', mapping: DisallowedStd3Mapped("\u{20}\u{308}") },
    Range { from: '\u{a9}', to: '\u{a9}', mapping: Valid },
    Range { from: '\u{aa}', to: '\u{aa}', mapping: Mapped("\u{61}") },
    Range { from: '\u{ab}', to: '\u{ac}', mapping: Valid },
    Range { from: '\u{ad}', to: '\u{ad}', mapping: Ignored },
    Range { from: '\u{ae}', to: '\u{ae}', mapping: Valid },
    Range { from: '\u{af}', to: '\u{af}', mapping: DisallowedStd3Mapped("\u{20}\u{304}") },
    Range { from: '\u{b0}', to: '\u{b1}', mapping: Valid },
    Range { from: '\u{b2}', to: '\u{b2}', mapping: Mapped("\u{32}") },
    Range { from: '\u{b3}', to: '\u{b3}', mapping: Mapped("\u{33}") },
    Range { from: '\u{b4}', to: '\u{b4}', mapping: DisallowedStd3Mapped("\u{20}\u{301}") },
    Range { from: '\u{b5}', to: '\u{b5}', mapping: Mapped("\u{3bc}") },
    Range { from: '\u{b6}', to: '\u{b7}', mapping: Valid },
    Range { from: '\u{b8}', to: '\u{b8}', mapping: DisallowedStd3Mapped("\u{20}\u{327}") },
    Range { from: '\u{b9}', to: '\u{b9}', mapping: Mapped("\u{31}") },
    Range { from: '\u{ba}', to: '\u{ba}', mapping: Mapped("\u{6f}") },
    Range { from: '\u{bb}', to: '\u{bb}', mapping: Valid },
    Range { from: '\u{bc}', to: '\u{bc}', mapping: Mapped("\u{31}\u{2044}\u{34}") },
    Range { from: '\u{bd}', to: '\u{bd}', mapping: Mapped("\u{31}\u{2044}\u{32}") },
    Range { from: '\u{be}', to: '\u{be}', mapping: Mapped("\u{33}\u{2044}\u{34}") },
    Range { from: '\u{bf}', to: '\u{bf}', mapping: Valid },
    Range { from: '\u{c0}', to: '\u{c0}', mapping: Mapped("\u{e0}") },
    Range { from: '\u{c1}', to: '\u{c1}', mapping: Mapped("\u{e1}") },
    Range { from: '\u{c2}', to: '\u{c2}', mapping: Mapped("\u{e2}") },
    Range { from: '\u{c3}', to: '\u{c3}', mapping: Mapped("\u{e3}") },
    Range { from: '\u{c4}', to: '\u{c4}', mapping: Mapped("\u{e4}") },
    Range { from: '\u{c5}', to: '\u{c5}', mapping: Mapped("\u{e5}") },
    Range { from: '\u{c6}', to: '\u{c6}', mapping: Mapped("\u{e6}") },
    Range { from: '\u{c7}', to: '\u{c7}', mapping: Mapped("\u{e7}") },
    Range { from: '\u{c8}', to: '\u{c8}', mapping: Mapped("\u{e8}") },
    Range { from: '\u{c9}', to: '\u{c9}', mapping: Mapped("\u{e9}") },
    Range { from: '\u{ca}', to: '\u{ca}', mapping: Mapped("\u{ea}") },
    Range { from: '\u{cb}', to: '\u{cb}', mapping: Mapped("\u{eb}") },
    Range { from: '\u{cc}', to: '\u{cc}', mapping: Mapped("\u{ec}") },
    Range { from: '\u{cd}', to: '\u{cd}', mapping: Mapped("\u{ed}") },
    Range { from: '\u{ce}', to: '\u{ce}', mapping: Mapped("\u{ee}") },
    Range { from: '\u{cf}', to: '\u{cf}', mapping: Mapped("\u{ef}") },
    Range { from: '\u{d0}', to: '\u{d0}', mapping: Mapped("\u{f0}") },
    Range { from: '\u{d1}', to: '\u{d1}', mapping: Mapped("\u{f1}") },
    Range { from: '\u{d2}', to: '\u{d2}', mapping: Mapped("\u{f2}") },
    Range { from: '\u{d3}', to: '\u{d3}', mapping: Mapped("\u{f3}") },
    Range { from: '\u{d4}', to: '\u{d4}', mapping: Mapped("\u{f4}") },
    Range { from: '\u{d5}', to: '\u{d5}', mapping: Mapped("\u{f5}") },
    Range { from: '\u{d6}', to: '\u{d6}', mapping: Mapped("\u{f6}") },
    Range { from: '\u{d7}', to: '\u{d7}', mapping: Valid },
    Range { from: '\u{d8}', to: '\u{d8}', mapping: Mapped("\u{f8}") },
    Range { from: '\u{d9}', to: '\u{d9}', mapping: Mapped("\u{f9}") },
    Range { from: '\u{da}', to: '\u{da}', mapping: Mapped("\u{fa}") },
    Range { from: '\u{db}', to: '\u{db}', mapping: Mapped("\u{fb}") },
    Range { from: '\u{dc}', to: '\u{dc}', mapping: Mapped("\u{fc}") },
    Range { from: '\u{dd}', to: '\u{dd}', mapping: Mapped("\u{fd}") },
    Range { from: '\u{de}', to: '\u{de}', mapping: Mapped("\u{fe}") },
    Range { from: '\u{df}', to: '\u{df}', mapping: Deviation("\u{73}\u{73}") },
    Range { from: '\u{e0}', to: '\u{ff}', mapping: Valid },
    Range { from: '\u{100}', to: '\u{100}', mapping: Mapped("\u{101}") },
    Range { from: '\u{101}', to: '\u{101}', mapping: Valid },
    Range { from: '\u{102}', to: '\u{102}', mapping: Mapped("\u{103}") },
    Range { from: '\u{103}', to: '\u{103}', mapping: Valid },
    Range { from: '\u{104}', to: '\u{104}', mapping: Mapped("\u{105}") },
    Range { from: '\u{105}', to: '\u{105}', mapping: Valid },
    Range { from: '\u{106}', to: '\u{106}', mapping: Mapped("\u{107}") },
    Range { from: '\u{107}', to: '\u{107}', mapping: Valid },
    Range { from: '\u{108}', to: '\u{108}', mapping: Mapped("\u{109}") },
    Range { from: '\u{109}', to: '\u{109}', mapping: Valid },
    Range { from: '\u{10a}', to: '\u{10a}', mapping: Mapped("\u{10b}") },
    Range { from: '\u{10b}', to: '\u{10b}', mapping: Valid },
    Range { from: '\u{10c}', to: '\u{10c}', mapping: Mapped("\u{10d}") },
    Range { from: '\u{10d}', to: '\u{10d}', mapping: Valid },
    Range { from: '\u{10e}', to: '\u{10e}', mapping: Mapped("\u{10f}") },
    Range { from: '\u{10f}', to: '\u{10f}', mapping: Valid },
    Range { from: '\u{110}', to: '\u{110}', mapping: Mapped("\u{111}") },
    Range { from: '\u{111}', to: '\u{111}', mapping: Valid },
    Range { from: '\u{112}', to: '\u{112}', mapping: Mapped("\u{113}") },
    Range { from: '\u{113}', to: '\u{113}', mapping: Valid },
    Range { from: '\u{114}', to: '\u{114}', mapping: Mapped("\u{115}") },
    Range { from: '\u{115}', to: '\u{115}', mapping: Valid },
    Range { from: '\u{116}', to: '\u{116}', mapping: Mapped("\u{117}") },
    Range { from: '\u{117}', to: '\u{117}', mapping: Valid },
    Range { from: '\u{118}', to: '\u{118}', mapping: Mapped("\u{119}") },
    Range { from: '\u{119}', to: '\u{119}', mapping: Valid },
    Range { from: '\u{11a}', to: '\u{11a}', mapping: Mapped("\u{11b}") },
    Range { from: '\u{11b}', to: '\u{11b}', mapping: Valid },
    Range { from: '\u{11c}', to: '\u{11c}', mapping: Mapped("\u{11d}") },
    Range { from: '\u{11d}', to: '\u{11d}', mapping: Valid },
    Range { from: '\u{11e}', to: '\u{11e}', mapping: Mapped("\u{11f}") },
    Range { from: '\u{11f}', to: '\u{11f}', mapping: Valid },
    Range { from: '\u{120}', to: '\u{120}', mapping: Mapped("\u{121}") },
    Range { from: '\u{121}', to: '\u{121}', mapping: Valid },
    Range { from: '\u{122}', to: '\u{122}', mapping: Mapped("\u{123}") },
    Range { from: '\u{123}', to: '\u{123}', mapping: Valid },
    Range { from: '\u{124}', to: '\u{124}', mapping: Mapped("\u{125}") },
    Range { from: '\u{125}', to: '\u{125}', mapping: Valid },
    Range { from: '\u{126}', to: '\u{126}', mapping: Mapped("\u{127}") },
    Range { from: '\u{127}', to: '\u{127}', mapping: Valid },
    Range { from: '\u{128}', to: '\u{128}', mapping: Mapped("\u{129}") },
    Range { from: '\u{129}', to: '\u{129}', mapping: Valid },
    Range { from: '\u{12a}', to: '\u{12a}', mapping: Mapped("\u{12b}") },
    Range { from: '\u{12b}', to: '\u{12b}', mapping: Valid },
    Range { from: '\u{12c}', to: '\u{12c}', mapping: Mapped("\u{12d}") },
    Range { from: '\u{12d}', to: '\u{12d}', mapping: Valid },
    Range { from: '\u{12e}', to: '\u{12e}', mapping: Mapped("\u{12f}") },
    Range { from: '\u{12f}', to: '\u{12f}', mapping: Valid },
    Range { from: '\u{130}', to: '\u{130}', mapping: Mapped("\u{69}\u{307}") },
    Range { from: '\u{131}', to: '\u{131}', mapping: Valid },
    Range { from: '\u{132}', to: '\u{133}', mapping: Mapped("\u{69}\u{6a}") },
    Range { from: '\u{134}', to: '\u{134}', mapping: Mapped("\u{135}") },
    Range { from: '\u{135}', to: '\u{135}', mapping: Valid },
    Range { from: '\u{136}', to: '\u{136}', mapping: Mapped("\u{137}") },
    Range { from: '\u{137}', to: '\u{138}', mapping: Valid },
    Range { from: '\u{139}', to: '\u{139}', mapping: Mapped("\u{13a}") },
    Range { from: '\u{13a}', to: '\u{13a}', mapping: Valid },
    Range { from: '\u{13b}', to: '\u{13b}', mapping: Mapped("\u{13c}") },
    Range { from: '\u{13c}', to: '\u{13c}', mapping: Valid },
    Range { from: '\u{13d}', to: '\u{13d}', mapping: Mapped("\u{13e}") },
    Range { from: '\u{13e}', to: '\u{13e}', mapping: Valid },
    Range { from: '\u{13f}', to: '\u{140}', mapping: Mapped("\u{6c}\u{b7}") },
    Range { from: '\u{141}', to: '\u{141}', mapping: Mapped("\u{142}") },
    Range { from: '\u{142}', to: '\u{142}', mapping: Valid },
    Range { from: '\u{143}', to: '\u{143}', mapping: Mapped("\u{144}") },
    Range { from: '\u{144}', to: '\u{144}', mapping: Valid },
    Range { from: '\u{145}', to: '\u{145}', mapping: Mapped("\u{146}") },
    Range { from: '\u{146}', to: '\u{146}', mapping: Valid },
    Range { from: '\u{147}', to: '\u{147}', mapping: Mapped("\u{148}") },
    Range { from: '\u{148}', to: '\u{148}', mapping: Valid },
    Range { from: '\u{149}', to: '\u{149}', mapping: Mapped("\u{2bc}\u{6e}") },
    Range { from: '\u{14a}', to: '\u{14a}', mapping: Mapped("\u{14b}") },
    Range { from: '\u{14b}', to: '\u{14b}', mapping: Valid },
    Range { from: '\u{14c}', to: '\u{14c}', mapping: Mapped("\u{14d}") },
    Range { from: '\u{14d}', to: '\u{14d}', mapping: Valid },
    Range { from: '\u{14e}', to: '\u{14e}', mapping: Mapped("\u{14f}") },
    Range { from: '\u{14f}', to: '\u{14f}', mapping: Valid },
    Range { from: '\u{150}', to: '\u{150}', mapping: Mapped("\u{151}") },
    Range { from: '\u{151}', to: '\u{151}', mapping: Valid },
    Range { from: '\u{152}', to: '\u{152}', mapping: Mapped("\u{153}") },
    Range { from: '\u{153}', to: '\u{153}', mapping: Valid },
    Range { from: '\u{154}', to: '\u{154}', mapping: Mapped("\u{155}") },
    Range { from: '\u{155}', to: '\u{155}', mapping: Valid },
    Range { from: '\u{156}', to: '\u{156}', mapping: Mapped("\u{157}") },
    Range { from: '\u{157}', to: '\u{157}', mapping: Valid },
    Range { from: '\u{158}', to: '\u{158}', mapping: Mapped("\u{159}") },
    Range { from: '\u{159}', to: '\u{159}', mapping: Valid },
    Range { from: '\u{15a}', to: '\u{15a}', mapping: Mapped("\u{15b}") },
    Range { from: '\u{15b}', to: '\u{15b}', mapping: Valid },
    Range { from: '\u{15c}', to: '\u{15c}', mapping: Mapped("\u{15d}") },
    Range { from: '\u{15d}', to: '\u{15d}', mapping: Valid },
    Range { from: '\u{15e}', to: '\u{15e}', mapping: Mapped("\u{15f}") },
    Range { from: '\u{15f}', to: '\u{15f}', mapping: Valid },
    Range { from: '\u{160}', to: '\u{160}', mapping: Mapped("\u{161}") },
    Range { from: '\u{161}', to: '\u{161}', mapping: Valid },
    Range { from: '\u{162}', to: '\u{162}', mapping: Mapped("\u{163}") },
    Range { from: '\u{163}', to: '\u{163}', mapping: Valid },
    Range { from: '\u{164}', to: '\u{164}', mapping: Mapped("\u{165}") },
    Range { from: '\u{165}', to: '\u{165}', mapping: Valid },
    Range { from: '\u{166}', to: '\u{166}', mapping: Mapped("\u{167}") },
    Range { from: '\u{167}', to: '\u{167}', mapping: Valid },
    Range { from: '\u{168}', to: '\u{168}', mapping: Mapped("\u{169}") },
    Range { from: '\u{169}', to: '\u{169}', mapping: Valid },
    Range { from: '\u{16a}', to: '\u{16a}', mapping: Mapped("\u{16b}") },
    Range { from: '\u{16b}', to: '\u{16b}', mapping: Valid },
    Range { from: '\u{16c}', to: '\u{16c}', mapping: Mapped("\u{16d}") },
    Range { from: '\u{16d}', to: '\u{16d}', mapping: Valid },
    Range { from: '\u{16e}', to: '\u{16e}', mapping: Mapped("\u{16f}") },
    Range { from: '\u{16f}', to: '\u{16f}', mapping: Valid },
    Range { from: '\u{170}', to: '\u{170}', mapping: Mapped("\u{171}") },
    Range { from: '\u{171}', to: '\u{171}', mapping: Valid },
    Range { from: '\u{172}', to: '\u{172}', mapping: Mapped("\u{173}") },
    Range { from: '\u{173}', to: '\u{173}', mapping: Valid },
    Range { from: '\u{174}', to: '\u{174}', mapping: Mapped("\u{175}") },
    Range { from: '\u{175}', to: '\u{175}', mapping: Valid },
    Range { from: '\u{176}', to: '\u{176}', mapping: Mapped("\u{177}") },
    Range { from: '\u{177}', to: '\u{177}', mapping: Valid },
    Range { from: '\u{178}', to: '\u{178}', mapping: Mapped("\u{ff}") },
    Range { from: '\u{179}', to: '\u{179}', mapping: Mapped("\u{17a}") },
    Range { from: '\u{17a}', to: '\u{17a}', mapping: Valid },
    Range { from: '\u{17b}', to: '\u{17b}', mapping: Mapped("\u{17c}") },
    Range { from: '\u{17c}', to: '\u{17c}', mapping: Valid },
    Range { from: '\u{17d}', to: '\u{17d}', mapping: Mapped("\u{17e}") },
    Range { from: '\u{17e}', to: '\u{17e}', mapping: Valid },
    Range { from: '\u{17f}', to: '\u{17f}', mapping: Mapped("\u{73}") },
    Range { from: '\u{180}', to: '\u{180}', mapping: Valid },
    Range { from: '\u{181}', to: '\u{181}', mapping: Mapped("\u{253}") },
    Range { from: '\u{182}', to: '\u{182}', mapping: Mapped("\u{183}") },
    Range { from: '\u{183}', to: '\u{183}', mapping: Valid },
    Range { from: '\u{184}', to: '\u{184}', mapping: Mapped("\u{185}") },
    Range { from: '\u{185}', to: '\u{185}', mapping: Valid },
    Range { from: '\u{186}', to: '\u{186}', mapping: Mapped("\u{254}") },
    Range { from: '\u{187}', to: '\u{187}', mapping: Mapped("\u{188}") },
    Range { from: '\u{188}', to: '\u{188}', mapping: Valid },
    Range { from: '\u{189}', to: '\u{189}', mapping: Mapped("\u{256}") },
    Range { from: '\u{18a}', to: '\u{18a}', mapping: Mapped("\u{257}") },
    Range { from: '\u{18b}', to: '\u{18b}', mapping: Mapped("\u{18c}") },
    Range { from: '\u{18c}', to: '\u{18d}', mapping: Valid },
    Range { from: '\u{18e}', to: '\u{18e}', mapping: Mapped("\u{1dd}") },
    Range { from: '\u{18f}', to: '\u{18f}', mapping: Mapped("\u{259}") },
    Range { from: '\u{190}', to: '\u{190}', mapping: Mapped("\u{25b}") },
    Range { from: '\u{191}', to: '\u{191}', mapping: Mapped("\u{192}") },
    Range { from: '\u{192}', to: '\u{192}', mapping: Valid },
    Range { from: '\u{193}', to: '\u{193}', mapping: Mapped("\u{260}") },
    Range { from: '\u{194}', to: '\u{194}', mapping: Mapped("\u{263}") },
    Range { from: '\u{195}', to: '\u{195}', mapping: Valid },
    Range { from: '\u{196}', to: '\u{196}', mapping: Mapped("\u{269}") },
    Range { from: '\u{197}', to: '\u{197}', mapping: Mapped("\u{268}") },
    Range { from: '\u{198}', to: '\u{198}', mapping: Mapped("\u{199}") },
    Range { from: '\u{199}', to: '\u{19b}', mapping: Valid },
    Range { from: '\u{19c}', to: '\u{19c}', mapping: Mapped("\u{26f}") },
    Range { from: '\u{19d}', to: '\u{19d}', mapping: Mapped("\u{272}") },
    Range { from: '\u{19e}', to: '\u{19e}', mapping: Valid },
    Range { from: '\u{19f}', to: '\u{19f}', mapping: Mapped("\u{275}") },
    Range { from: '\u{1a0}', to: '\u{1a0}', mapping: Mapped("\u{1a1}") },
    Range { from: '\u{1a1}', to: '\u{1a1}', mapping: Valid },
    Range { from: '\u{1a2}', to: '\u{1a2}', mapping: Mapped("\u{1a3}") },
    Range { from: '\u{1a3}', to: '\u{1a3}', mapping: Valid },
    Range { from: '\u{1a4}', to: '\u{1a4}', mapping: Mapped("\u{1a5}") },
    Range { from: '\u{1a5}', to: '\u{1a5}', mapping: Valid },
    Range { from: '\u{1a6}', to: '\u{1a6}', mapping: Mapped("\u{280}") },
    Range { from: '\u{1a7}', to: '\u{1a7}', mapping: Mapped("\u{1a8}") },
    Range { from: '\u{1a8}', to: '\u{1a8}', mapping: Valid },
    Range { from: '\u{1a9}', to: '\u{1a9}', mapping: Mapped("\u{283}") },
    Range { from: '\u{1aa}', to: '\u{1ab}', mapping: Valid },
    Range { from: '\u{1ac}', to: '\u{1ac}', mapping: Mapped("\u{1ad}") },
    Range { from: '\u{1ad}', to: '\u{1ad}', mapping: Valid },
    Range { from: '\u{1ae}', to: '\u{1ae}', mapping: Mapped("\u{288}") },
    Range { from: '\u{1af}', to: '\u{1af}', mapping: Mapped("\u{1b0}") },
    Range { from: '\u{1b0}', to: '\u{1b0}', mapping: Valid },
    Range { from: '\u{1b1}', to: '\u{1b1}', mapping: Mapped("\u{28a}") },
    Range { from: '\u{1b2}', to: '\u{1b2}', mapping: Mapped("\u{28b}") },
    Range { from: '\u{1b3}', to: '\u{1b3}', mapping: Mapped("\u{1b4}") },
    Range { from: '\u{1b4}', to: '\u{1b4}', mapping: Valid },
    Range { from: '\u{1b5}', to: '\u{1b5}', mapping: Mapped("\u{1b6}") },
    Range { from: '\u{1b6}', to: '\u{1b6}', mapping: Valid },
    Range { from: '\u{1b7}', to: '\u{1b7}', mapping: Mapped("\u{292}") },
    Range { from: '\u{1b8}', to: '\u{1b8}', mapping: Mapped("\u{1b9}") },
    Range { from: '\u{1b9}', to: '\u{1bb}', mapping: Valid },
    Range { from: '\u{1bc}', to: '\u{1bc}', mapping: Mapped("\u{1bd}") },
    Range { from: '\u{1bd}', to: '\u{1c3}', mapping: Valid },
    Range { from: '\u{1c4}', to: '\u{1c6}', mapping: Mapped("\u{64}\u{17e}") },
    Range { from: '\u{1c7}', to: '\u{1c9}', mapping: Mapped("\u{6c}\u{6a}") },
    Range { from: '\u{1ca}', to: '\u{1cc}', mapping: Mapped("\u{6e}\u{6a}") },
    Range { from: '\u{1cd}', to: '\u{1cd}', mapping: Mapped("\u{1ce}") },
    Range { from: '\u{1ce}', to: '\u{1ce}', mapping: Valid },
    Range { from: '\u{1cf}', to: '\u{1cf}', mapping: Mapped("\u{1d0}") },
    Range { from: '\u{1d0}', to: '\u{1d0}', mapping: Valid },
    Range { from: '\u{1d1}', to: '\u{1d1}', mapping: Mapped("\u{1d2}") },
    Range { from: '\u{1d2}', to: '\u{1d2}', mapping: Valid },
    Range { from: '\u{1d3}', to: '\u{1d3}', mapping: Mapped("\u{1d4}") },
    Range { from: '\u{1d4}', to: '\u{1d4}', mapping: Valid },
    Range { from: '\u{1d5}', to: '\u{1d5}', mapping: Mapped("\u{1d6}") },
    Range { from: '\u{1d6}', to: '\u{1d6}', mapping: Valid },
    Range { from: '\u{1d7}', to: '\u{1d7}', mapping: Mapped("\u{1d8}") },
    Range { from: '\u{1d8}', to: '\u{1d8}', mapping: Valid },
    Range { from: '\u{1d9}', to: '\u{1d9}', mapping: Mapped("\u{1da}") },
    Range { from: '\u{1da}', to: '\u{1da}', mapping: Valid },
    Range { from: '\u{1db}', to: '\u{1db}', mapping: Mapped("\u{1dc}") },
    Range { from: '\u{1dc}', to: '\u{1dd}', mapping: Valid },
    Range { from: '\u{1de}', to: '\u{1de}', mapping: Mapped("\u{1df}") },
    Range { from: '\u{1df}', to: '\u{1df}', mapping: Valid },
    Range { from: '\u{1e0}', to: '\u{1e0}', mapping: Mapped("\u{1e1}") },
    Range { from: '\u{1e1}', to: '\u{1e1}', mapping: Valid },
    Range { from: '\u{1e2}', to: '\u{1e2}', mapping: Mapped("\u{1e3}") },
    Range { from: '\u{1e3}', to: '\u{1e3}', mapping: Valid },
    Range { from: '\u{1e4}', to: '\u{1e4}', mapping: Mapped("\u{1e5}") },
    Range { from: '\u{1e5}', to: '\u{1e5}', mapping: Valid },
    Range { from: '\u{1e6}', to: '\u{1e6}', mapping: Mapped("\u{1e7}") },
    Range { from: '\u{1e7}', to: '\u{1e7}', mapping: Valid },
    Range { from: '\u{1e8}', to: '\u{1e8}', mapping: Mapped("\u{1e9}") },
    Range { from: '\u{1e9}', to: '\u{1e9}', mapping: Valid },
    Range { from: '\u{1ea}', to: '\u{1ea}', mapping: Mapped("\u{1eb}") },
    Range { from: '\u{1eb}', to: '\u{1eb}', mapping: Valid },
    Range { from: '\u{1ec}', to: '\u{1ec}', mapping: Mapped("\u{1ed}") },
    Range { from: '\u{1ed}', to: '\u{1ed}', mapping: Valid },
    Range { from: '\u{1ee}', to: '\u{1ee}', mapping: Mapped("\u{1ef}") },
    Range { from: '\u{1ef}', to: '\u{1f0}', mapping: Valid },
    Range { from: '\u{1f1}', to: '\u{1f3}', mapping: Mapped("\u{64}\u{7a}") },
    Range { from: '\u{1f4}', to: '\u{1f4}', mapping: Mapped("\u{1f5}") },
    Range { from: '\u{1f5}', to: '\u{1f5}', mapping: Valid },
    Range { from: '\u{1f6}', to: '\u{1f6}', mapping: Mapped("\u{195}") },
    Range { from: '\u{1f7}', to: '\u{1f7}', mapping: Mapped("\u{1bf}") },
    Range { from: '\u{1f8}', to: '\u{1f8}', mapping: Mapped("\u{1f9}") },
    Range { from: '\u{1f9}', to: '\u{1f9}', mapping: Valid },
    Range { from: '\u{1fa}', to: '\u{1fa}', mapping: Mapped("\u{1fb}") },
    Range { from: '\u{1fb}', to: '\u{1fb}', mapping: Valid },
    Range { from: '\u{1fc}', to: '\u{1fc}', mapping: Mapped("\u{1fd}") },
    Range { from: '\u{1fd}', to: '\u{1fd}', mapping: Valid },
    Range { from: '\u{1fe}', to: '\u{1fe}', mapping: Mapped("\u{1ff}") },
    Range { from: '\u{1ff}', to: '\u{1ff}', mapping: Valid },
    Range { from: '\u{200}', to: '\u{200}', mapping: Mapped("\u{201}") },
    Range { from: '\u{201}', to: '\u{201}', mapping: Valid },
    Range { from: '\u{202}', to: '\u{202}', mapping: Mapped("\u{203}") },
    Range { from: '\u{203}', to: '\u{203}', mapping: Valid },
    Range { from: '\u{204}', to: '\u{204}', mapping: Mapped("\u{205}") },
    Range { from: '\u{205}', to: '\u{205}', mapping: Valid },
    Range { from: '\u{206}', to: '\u{206}', mapping: Mapped("\u{207}") },
    Range { from: '\u{207}', to: '\u{207}', mapping: Valid },
    Range { from: '\u{208}', to: '\u{208}', mapping: Mapped("\u{209}") },
    Range { from: '\u{209}', to: '\u{209}', mapping: Valid },
    Range { from: '\u{20a}', to: '\u{20a}', mapping: Mapped("\u{20b}") },
    Range { from: '\u{20b}', to: '\u{20b}', mapping: Valid },
    Range { from: '\u{20c}', to: '\u{20c}', mapping: Mapped("\u{20d}") },
    Range { from: '\u{20d}', to: '\u{20d}', mapping: Valid },
    Range { from: '\u{20e}', to: '\u{20e}', mapping: Mapped("\u{20f}") },
    Range { from: '\u{20f}', to: '\u{20f}', mapping: Valid },
    Range { from: '\u{210}', to: '\u{210}', mapping: Mapped("\u{211}") },
    Range { from: '\u{211}', to: '\u{211}', mapping: Valid },
    Range { from: '\u{212}', to: '\u{212}', mapping: Mapped("\u{213}") },
    Range { from: '\u{213}', to: '\u{213}', mapping: Valid },
    Range { from: '\u{214}', to: '\u{214}', mapping: Mapped("\u{215}") },
    Range { from: '\u{215}', to: '\u{215}', mapping: Valid },
    Range { from: '\u{216}', to: '\u{216}', mapping: Mapped("\u{217}") },
    Range { from: '\u{217}', to: '\u{217}', mapping: Valid },
    Range { from: '\u{218}', to: '\u{218}', mapping: Mapped("\u{219}") },
    Range { from: '\u{219}', to: '\u{219}', mapping: Valid },
    Range { from: '\u{21a}', to: '\u{21a}', mapping: Mapped("\u{21b}") },
    Range { from: '\u{21b}', to: '\u{21b}', mapping: Valid },
    Range { from: '\u{21c}', to: '\u{21c}', mapping: Mapped("\u{21d}") },
    Range { from: '\u{21d}', to: '\u{21d}', mapping: Valid },
    Range { from: '\u{21e}', to: '\u{21e}', mapping: Mapped("\u{21f}") },
    Range { from: '\u{21f}', to: '\u{21f}', mapping: Valid },
    Range { from: '\u{220}', to: '\u{220}', mapping: Mapped("\u{19e}") },
    Range { from: '\u{221}', to: '\u{221}', mapping: Valid },
    Range { from: '\u{222}', to: '\u{222}', mapping: Mapped("\u{223}") },
    Range { from: '\u{223}', to: '\u{223}', mapping: Valid },
    Range { from: '\u{224}', to: '\u{224}', mapping: Mapped("\u{225}") },
    Range { from: '\u{225}', to: '\u{225}', mapping: Valid },
    Range { from: '\u{226}', to: '\u{226}', mapping: Mapped("\u{227}") },
    Range { from: '\u{227}', to: '\u{227}', mapping: Valid },
    Range { from: '\u{228}', to: '\u{228}', mapping: Mapped("\u{229}") },
    Range { from: '\u{229}', to: '\u{229}', mapping: Valid },
    Range { from: '\u{22a}', to: '\u{22a}', mapping: Mapped("\u{22b}") },
    Range { from: '\u{22b}', to: '\u{22b}', mapping: Valid },
    Range { from: '\u{22c}', to: '\u{22c}', mapping: Mapped("\u{22d}") },
    Range { from: '\u{22d}', to: '\u{22d}', mapping: Valid },
    Range { from: '\u{22e}', to: '\u{22e}', mapping: Mapped("\u{22f}") },
    Range { from: '\u{22f}', to: '\u{22f}', mapping: Valid },
    Range { from: '\u{230}', to: '\u{230}', mapping: Mapped("\u{231}") },
    Range { from: '\u{231}', to: '\u{231}', mapping: Valid },
    Range { from: '\u{232}', to: '\u{232}', mapping: Mapped("\u{233}") },
    Range { from: '\u{233}', to: '\u{239}', mapping: Valid },
    Range { from: '\u{23a}', to: '\u{23a}', mapping: Mapped("\u{2c65}") },
    Range { from: '\u{23b}', to: '\u{23b}', mapping: Mapped("\u{23c}") },
    Range { from: '\u{23c}', to: '\u{23c}', mapping: Valid },
    Range { from: '\u{23d}', to: '\u{23d}', mapping: Mapped("\u{19a}") },
    Range { from: '\u{23e}', to: '\u{23e}', mapping: Mapped("\u{2c66}") },
    Range { from: '\u{23f}', to: '\u{240}', mapping: Valid },
    Range { from: '\u{241}', to: '\u{241}', mapping: Mapped("\u{242}") },
    Range { from: '\u{242}', to: '\u{242}', mapping: Valid },
    Range { from: '\u{243}', to: '\u{243}', mapping: Mapped("\u{180}") },
    Range { from: '\u{244}', to: '\u{244}', mapping: Mapped("\u{289}") },
    Range { from: '\u{245}', to: '\u{245}', mapping: Mapped("\u{28c}") },
    Range { from: '\u{246}', to: '\u{246}', mapping: Mapped("\u{247}") },
    Range { from: '\u{247}', to: '\u{247}', mapping: Valid },
    Range { from: '\u{248}', to: '\u{248}', mapping: Mapped("\u{249}") },
    Range { from: '\u{249}', to: '\u{249}', mapping: Valid },
    Range { from: '\u{24a}', to: '\u{24a}', mapping: Mapped("\u{24b}") },
    Range { from: '\u{24b}', to: '\u{24b}', mapping: Valid },
    Range { from: '\u{24c}', to: '\u{24c}', mapping: Mapped("\u{24d}") },
    Range { from: '\u{24d}', to: '\u{24d}', mapping: Valid },
    Range { from: '\u{24e}', to: '\u{24e}', mapping: Mapped("\u{24f}") },
    Range { from: '\u{24f}', to: '\u{24f}', mapping: Valid },
    Range { from: '\u{250}', to: '\u{2af}', mapping: Valid },
    Range { from: '\u{2b0}', to: '\u{2b0}', mapping: Mapped("\u{68}") },
    Range { from: '\u{2b1}', to: '\u{2b1}', mapping: Mapped("\u{266}") },
    Range { from: '\u{2b2}', to: '\u{2b2}', mapping: Mapped("\u{6a}") },
    Range { from: '\u{2b3}', to: '\u{2b3}', mapping: Mapped("\u{72}") },
    Range { from: '\u{2b4}', to: '\u{2b4}', mapping: Mapped("\u{279}") },
    Range { from: '\u{2b5}', to: '\u{2b5}', mapping: Mapped("\u{27b}") },
    Range { from: '\u{2b6}', to: '\u{2b6}', mapping: Mapped("\u{281}") },
    Range { from: '\u{2b7}', to: '\u{2b7}', mapping: Mapped("\u{77}") },
    Range { from: '\u{2b8}', to: '\u{2b8}', mapping: Mapped("\u{79}") },
    Range { from: '\u{2b9}', to: '\u{2d7}', mapping: Valid },
    Range { from: '\u{2d8}', to: '\u{2d8}', mapping: DisallowedStd3Mapped("\u{20}\u{306}") },
    Range { from: '\u{2d9}', to: '\u{2d9}', mapping: DisallowedStd3Mapped("\u{20}\u{307}") },
    Range { from: '\u{2da}', to: '\u{2da}', mapping: DisallowedStd3Mapped("\u{20}\u{30a}") },
    Range { from: '\u{2db}', to: '\u{2db}', mapping: DisallowedStd3Mapped("\u{20}\u{328}") },
    Range { from: '\u{2dc}', to: '\u{2dc}', mapping: DisallowedStd3Mapped("\u{20}\u{303}") },
    Range { from: '\u{2dd}', to: '\u{2dd}', mapping: DisallowedStd3Mapped("\u{20}\u{30b}") },
    Range { from: '\u{2de}', to: '\u{2df}', mapping: Valid },
    Range { from: '\u{2e0}', to: '\u{2e0}', mapping: Mapped("\u{263}") },
    Range { from: '\u{2e1}', to: '\u{2e1}', mapping: Mapped("\u{6c}") },
    Range { from: '\u{2e2}', to: '\u{2e2}', mapping: Mapped("\u{73}") },
    Range { from: '\u{2e3}', to: '\u{2e3}', mapping: Mapped("\u{78}") },
    Range { from: '\u{2e4}', to: '\u{2e4}', mapping: Mapped("\u{295}") },
    Range { from: '\u{2e5}', to: '\u{2ff}', mapping: Valid },
    Range { from: '\u{300}', to: '\u{33f}', mapping: Valid },
    Range { from: '\u{340}', to: '\u{340}', mapping: Mapped("\u{300}") },
    Range { from: '\u{341}', to: '\u{341}', mapping: Mapped("\u{301}") },
    Range { from: '\u{342}', to: '\u{342}', mapping: Valid },
    Range { from: '\u{343}', to: '\u{343}', mapping: Mapped("\u{313}") },
    Range { from: '\u{344}', to: '\u{344}', mapping: Mapped("\u{308}\u{301}") },
    Range { from: '\u{345}', to: '\u{345}', mapping: Mapped("\u{3b9}") },
    Range { from: '\u{346}', to: '\u{34e}', mapping: Valid },
    Range { from: '\u{34f}', to: '\u{34f}', mapping: Ignored },
    Range { from: '\u{350}', to: '\u{36f}', mapping: Valid },
    Range { from: '\u{370}', to: '\u{370}', mapping: Mapped("\u{371}") },
    Range { from: '\u{371}', to: '\u{371}', mapping: Valid },
    Range { from: '\u{372}', to: '\u{372}', mapping: Mapped("\u{373}") },
    Range { from: '\u{373}', to: '\u{373}', mapping: Valid },
    Range { from: '\u{374}', to: '\u{374}', mapping: Mapped("\u{2b9}") },
    Range { from: '\u{375}', to: '\u{375}', mapping: Valid },
    Range { from: '\u{376}', to: '\u{376}', mapping: Mapped("\u{377}") },
    Range { from: '\u{377}', to: '\u{377}', mapping: Valid },
    Range { from: '\u{37a}', to: '\u{37a}', mapping: DisallowedStd3Mapped("\u{20}\u{3b9}") },
    Range { from: '\u{37b}', to: '\u{37d}', mapping: Valid },
    Range { from: '\u{37e}', to: '\u{37e}', mapping: DisallowedStd3Mapped("\u{3b}") },
    Range { from: '\u{37f}', to: '\u{37f}', mapping: Mapped("\u{3f3}") },
    Range { from: '\u{384}', to: '\u{384}', mapping: DisallowedStd3Mapped("\u{20}\u{301}") },
    Range { from: '\u{385}', to: '\u{385}', mapping: DisallowedStd3Mapped("\u{20}\u{308}\u{301}") },
    Range { from: '\u{386}', to: '\u{386}', mapping: Mapped("\u{3ac}") },
    Range { from: '\u{387}', to: '\u{387}', mapping: Mapped("\u{b7}") },
    Range { from: '\u{388}', to: '\u{388}', mapping: Mapped("\u{3ad}") },
    Range { from: '\u{389}', to: '\u{389}', mapping: Mapped("\u{3ae}") },
    Range { from: '\u{38a}', to: '\u{38a}', mapping: Mapped("\u{3af}") },
    Range { from: '\u{38c}', to: '\u{38c}', mapping: Mapped("\u{3cc}") },
    Range { from: '\u{38e}', to: '\u{38e}', mapping: Mapped("\u{3cd}") },
    Range { from: '\u{38f}', to: '\u{38f}', mapping: Mapped("\u{3ce}") },
    Range { from: '\u{390}', to: '\u{390}', mapping: Valid },
    Range { from: '\u{391}', to: '\u{391}', mapping: Mapped("\u{3b1}") },
    Range { from: '\u{392}', to: '\u{392}', mapping: Mapped("\u{3b2}") },
    Range { from: '\u{393}', to: '\u{393}', mapping: Mapped("\u{3b3}") },
    Range { from: '\u{394}', to: '\u{394}', mapping: Mapped("\u{3b4}") },
    Range { from: '\u{395}', to: '\u{395}', mapping: Mapped("\u{3b5}") },
    Range { from: '\u{396}', to: '\u{396}', mapping: Mapped("\u{3b6}") },
    Range { from: '\u{397}', to: '\u{397}', mapping: Mapped("\u{3b7}") },
    Range { from: '\u{398}', to: '\u{398}', mapping: Mapped("\u{3b8}") },
    Range { from: '\u{399}', to: '\u{399}', mapping: Mapped("\u{3b9}") },
    Range { from: '\u{39a}', to: '\u{39a}', mapping: Mapped("\u{3ba}") },
    Range { from: '\u{39b}', to: '\u{39b}', mapping: Mapped("\u{3bb}") },
    Range { from: '\u{39c}', to: '\u{39c}', mapping: Mapped("\u{3bc}") },
    Range { from: '\u{39d}', to: '\u{39d}', mapping: Mapped("\u{3bd}") },
    Range { from: '\u{39e}', to: '\u{39e}', mapping: Mapped("\u{3be}") },
    Range { from: '\u{39f}', to: '\u{39f}', mapping: Mapped("\u{3bf}") },
    Range { from: '\u{3a0}', to: '\u{3a0}', mapping: Mapped("\u{3c0}") },
    Range { from: '\u{3a1}', to: '\u{3a1}', mapping: Mapped("\u{3c1}") },
    Range { from: '\u{3a3}', to: '\u{3a3}', mapping: Mapped("\u{3c3}") },
    Range { from: '\u{3a4}', to: '\u{3a4}', mapping: Mapped("\u{3c4}") },
    Range { from: '\u{3a5}', to: '\u{3a5}', mapping: Mapped("\u{3c5}") },
    Range { from: '\u{3a6}', to: '\u{3a6}', mapping: Mapped("\u{3c6}") },
    Range { from: '\u{3a7}', to: '\u{3a7}', mapping: Mapped("\u{3c7}") },
    Range { from: '\u{3a8}', to: '\u{3a8}', mapping: Mapped("\u{3c8}") },
    Range { from: '\u{3a9}', to: '\u{3a9}', mapping: Mapped("\u{3c9}") },
    Range { from: '\u{3aa}', to: '\u{3aa}', mapping: Mapped("\u{3ca}") },
    Range { from: '\u{3ab}', to: '\u{3ab}', mapping: Mapped("\u{3cb}") },
    Range { from: '\u{3ac}', to: '\u{3c1}', mapping: Valid },
    Range { from: '\u{3c2}', to: '\u{3c2}', mapping: Deviation("\u{3c3}") },
    Range { from: '\u{3c3}', to: '\u{3ce}', mapping: Valid },
    Range { from: '\u{3cf}', to: '\u{3cf}', mapping: Mapped("\u{3d7}") },
    Range { from: '\u{3d0}', to: '\u{3d0}', mapping: Mapped("\u{3b2}") },
    Range { from: '\u{3d1}', to: '\u{3d1}', mapping: Mapped("\u{3b8}") },
    Range { from: '\u{3d2}', to: '\u{3d2}', mapping: Mapped("\u{3c5}") },
    Range { from: '\u{3d3}', to: '\u{3d3}', mapping: Mapped("\u{3cd}") },
    Range { from: '\u{3d4}', to: '\u{3d4}', mapping: Mapped("\u{3cb}") },
    Range { from: '\u{3d5}', to: '\u{3d5}', mapping: Mapped("\u{3c6}") },
    Range { from: '\u{3d6}', to: '\u{3d6}', mapping: Mapped("\u{3c0}") },
    Range { from: '\u{3d7}', to: '\u{3d7}', mapping: Valid },
    Range { from: '\u{3d8}', to: '\u{3d8}', mapping: Mapped("\u{3d9}") },
    Range { from: '\u{3d9}', to: '\u{3d9}', mapping: Valid },
    Range { from: '\u{3da}', to: '\u{3da}', mapping: Mapped("\u{3db}") },
    Range { from: '\u{3db}', to: '\u{3db}', mapping: Valid },
    Range { from: '\u{3dc}', to: '\u{3dc}', mapping: Mapped("\u{3dd}") },
    Range { from: '\u{3dd}', to: '\u{3dd}', mapping: Valid },
    Range { from: '\u{3de}', to: '\u{3de}', mapping: Mapped("\u{3df}") },
    Range { from: '\u{3df}', to: '\u{3df}', mapping: Valid },
    Range { from: '\u{3e0}', to: '\u{3e0}', mapping: Mapped("\u{3e1}") },
    Range { from: '\u{3e1}', to: '\u{3e1}', mapping: Valid },
    Range { from: '\u{3e2}', to: '\u{3e2}', mapping: Mapped("\u{3e3}") },
    Range { from: '\u{3e3}', to: '\u{3e3}', mapping: Valid },
    Range { from: '\u{3e4}', to: '\u{3e4}', mapping: Mapped("\u{3e5}") },
    Range { from: '\u{3e5}', to: '\u{3e5}', mapping: Valid },
    Range { from: '\u{3e6}', to: '\u{3e6}', mapping: Mapped("\u{3e7}") },
    Range { from: '\u{3e7}', to: '\u{3e7}', mapping: Valid },
    Range { from: '\u{3e8}', to: '\u{3e8}', mapping: Mapped("\u{3e9}") },
    Range { from: '\u{3e9}', to: '\u{3e9}', mapping: Valid },
    Range { from: '\u{3ea}', to: '\u{3ea}', mapping: Mapped("\u{3eb}") },
    Range { from: '\u{3eb}', to: '\u{3eb}', mapping: Valid },
    Range { from: '\u{3ec}', to: '\u{3ec}', mapping: Mapped("\u{3ed}") },
    Range { from: '\u{3ed}', to: '\u{3ed}', mapping: Valid },
    Range { from: '\u{3ee}', to: '\u{3ee}', mapping: Mapped("\u{3ef}") },
    Range { from: '\u{3ef}', to: '\u{3ef}', mapping: Valid },
    Range { from: '\u{3f0}', to: '\u{3f0}', mapping: Mapped("\u{3ba}") },
    Range { from: '\u{3f1}', to: '\u{3f1}', mapping: Mapped("\u{3c1}") },
    Range { from: '\u{3f2}', to: '\u{3f2}', mapping: Mapped("\u{3c3}") },
    Range { from: '\u{3f3}', to: '\u{3f3}', mapping: Valid },
    Range { from: '\u{3f4}', to: '\u{3f4}', mapping: Mapped("\u{3b8}") },
    Range { from: '\u{3f5}', to: '\u{3f5}', mapping: Mapped("\u{3b5}") },
    Range { from: '\u{3f6}', to: '\u{3f6}', mapping: Valid },
    Range { from: '\u{3f7}', to: '\u{3f7}', mapping: Mapped("\u{3f8}") },
    Range { from: '\u{3f8}', to: '\u{3f8}', mapping: Valid },
    Range { from: '\u{3f9}', to: '\u{3f9}', mapping: Mapped("\u{3c3}") },
    Range { from: '\u{3fa}', to: '\u{3fa}', mapping: Mapped("\u{3fb}") },
    Range { from: '\u{3fb}', to: '\u{3fc}', mapping: Valid },
    Range { from: '\u{3fd}', to: '\u{3fd}', mapping: Mapped("\u{37b}") },
    Range { from: '\u{3fe}', to: '\u{3fe}', mapping: Mapped("\u{37c}") },
    Range { from: '\u{3ff}', to: '\u{3ff}', mapping: Mapped("\u{37d}") },
    Range { from: '\u{400}', to: '\u{400}', mapping: Mapped("\u{450}") },
    Range { from: '\u{401}', to: '\u{401}', mapping: Mapped("\u{451}") },
    Range { from: '\u{402}', to: '\u{402}', mapping: Mapped("\u{452}") },
    Range { from: '\u{403}', to: '\u{403}', mapping: Mapped("\u{453}") },
    Range { from: '\u{404}', to: '\u{404}', mapping: Mapped("\u{454}") },
    Range { from: '\u{405}', to: '\u{405}', mapping: Mapped("\u{455}") },
    Range { from: '\u{406}', to: '\u{406}', mapping: Mapped("\u{456}") },
    Range { from: '\u{407}', to: '\u{407}', mapping: Mapped("\u{457}") },
    Range { from: '\u{408}', to: '\u{408}', mapping: Mapped("\u{458}") },
    Range { from: '\u{409}', to: '\u{409}', mapping: Mapped("\u{459}") },
    Range { from: '\u{40a}', to: '\u{40a}', mapping: Mapped("\u{45a}") },
    Range { from: '\u{40b}', to: '\u{40b}', mapping: Mapped("\u{45b}") },
    Range { from: '\u{40c}', to: '\u{40c}', mapping: Mapped("\u{45c}") },
    Range { from: '\u{40d}', to: '\u{40d}', mapping: Mapped("\u{45d}") },
    Range { from: '\u{40e}', to: '\u{40e}', mapping: Mapped("\u{45e}") },
    Range { from: '\u{40f}', to: '\u{40f}', mapping: Mapped("\u{45f}") },
    Range { from: '\u{410}', to: '\u{410}', mapping: Mapped("\u{430}") },
    Range { from: '\u{411}', to: '\u{411}', mapping: Mapped("\u{431}") },
    Range { from: '\u{412}', to: '\u{412}', mapping: Mapped("\u{432}") },
    Range { from: '\u{413}', to: '\u{413}', mapping: Mapped("\u{433}") },
    Range { from: '\u{414}', to: '\u{414}', mapping: Mapped("\u{434}") },
    Range { from: '\u{415}', to: '\u{415}', mapping: Mapped("\u{435}") },
    Range { from: '\u{416}', to: '\u{416}', mapping: Mapped("\u{436}") },
    Range { from: '\u{417}', to: '\u{417}', mapping: Mapped("\u{437}") },
    Range { from: '\u{418}', to: '\u{418}', mapping: Mapped("\u{438}") },
    Range { from: '\u{419}', to: '\u{419}', mapping: Mapped("\u{439}") },
    Range { from: '\u{41a}', to: '\u{41a}', mapping: Mapped("\u{43a}") },
    Range { from: '\u{41b}', to: '\u{41b}', mapping: Mapped("\u{43b}") },
    Range { from: '\u{41c}', to: '\u{41c}', mapping: Mapped("\u{43c}") },
    Range { from: '\u{41d}', to: '\u{41d}', mapping: Mapped("\u{43d}") },
    Range { from: '\u{41e}', to: '\u{41e}', mapping: Mapped("\u{43e}") },
    Range { from: '\u{41f}', to: '\u{41f}', mapping: Mapped("\u{43f}") },
    Range { from: '\u{420}', to: '\u{420}', mapping: Mapped("\u{440}") },
    Range { from: '\u{421}', to: '\u{421}', mapping: Mapped("\u{441}") },
    Range { from: '\u{422}', to: '\u{422}', mapping: Mapped("\u{442}") },
    Range { from: '\u{423}', to: '\u{423}', mapping: Mapped("\u{443}") },
    Range { from: '\u{424}', to: '\u{424}', mapping: Mapped("\u{444}") },
    Range { from: '\u{425}', to: '\u{425}', mapping: Mapped("\u{445}") },
    Range { from: '\u{426}', to: '\u{426}', mapping: Mapped("\u{446}") },
    Range { from: '\u{427}', to: '\u{427}', mapping: Mapped("\u{447}") },
    Range { from: '\u{428}', to: '\u{428}', mapping: Mapped("\u{448}") },
    Range { from: '\u{429}', to: '\u{429}', mapping: Mapped("\u{449}") },
    Range { from: '\u{42a}', to: '\u{42a}', mapping: Mapped("\u{44a}") },
    Range { from: '\u{42b}', to: '\u{42b}', mapping: Mapped("\u{44b}") },
    Range { from: '\u{42c}', to: '\u{42c}', mapping: Mapped("\u{44c}") },
    Range { from: '\u{42d}', to: '\u{42d}', mapping: Mapped("\u{44d}") },
    Range { from: '\u{42e}', to: '\u{42e}', mapping: Mapped("\u{44e}") },
    Range { from: '\u{42f}', to: '\u{42f}', mapping: Mapped("\u{44f}") },
    Range { from: '\u{430}', to: '\u{45f}', mapping: Valid },
    Range { from: '\u{460}', to: '\u{460}', mapping: Mapped("\u{461}") },
    Range { from: '\u{461}', to: '\u{461}', mapping: Valid },
    Range { from: '\u{462}', to: '\u{462}', mapping: Mapped("\u{463}") },
    Range { from: '\u{463}', to: '\u{463}', mapping: Valid },
    Range { from: '\u{464}', to: '\u{464}', mapping: Mapped("\u{465}") },
    Range { from: '\u{465}', to: '\u{465}', mapping: Valid },
    Range { from: '\u{466}', to: '\u{466}', mapping: Mapped("\u{467}") },
    Range { from: '\u{467}', to: '\u{467}', mapping: Valid },
    Range { from: '\u{468}', to: '\u{468}', mapping: Mapped("\u{469}") },
    Range { from: '\u{469}', to: '\u{469}', mapping: Valid },
    Range { from: '\u{46a}', to: '\u{46a}', mapping: Mapped("\u{46b}") },
    Range { from: '\u{46b}', to: '\u{46b}', mapping: Valid },
    Range { from: '\u{46c}', to: '\u{46c}', mapping: Mapped("\u{46d}") },
    Range { from: '\u{46d}', to: '\u{46d}', mapping: Valid },
    Range { from: '\u{46e}', to: '\u{46e}', mapping: Mapped("\u{46f}") },
    Range { from: '\u{46f}', to: '\u{46f}', mapping: Valid },
    Range { from: '\u{470}', to: '\u{470}', mapping: Mapped("\u{471}") },
    Range { from: '\u{471}', to: '\u{471}', mapping: Valid },
    Range { from: '\u{472}', to: '\u{472}', mapping: Mapped("\u{473}") },
    Range { from: '\u{473}', to: '\u{473}', mapping: Valid },
    Range { from: '\u{474}', to: '\u{474}', mapping: Mapped("\u{475}") },
    Range { from: '\u{475}', to: '\u{475}', mapping: Valid },
    Range { from: '\u{476}', to: '\u{476}', mapping: Mapped("\u{477}") },
    Range { from: '\u{477}', to: '\u{477}', mapping: Valid },
    Range { from: '\u{478}', to: '\u{478}', mapping: Mapped("\u{479}") },
    Range { from: '\u{479}', to: '\u{479}', mapping: Valid },
    Range { from: '\u{47a}', to: '\u{47a}', mapping: Mapped("\u{47b}") },
    Range { from: '\u{47b}', to: '\u{47b}', mapping: Valid },
    Range { from: '\u{47c}', to: '\u{47c}', mapping: Mapped("\u{47d}") },
    Range { from: '\u{47d}', to: '\u{47d}', mapping: Valid },
    Range { from: '\u{47e}', to: '\u{47e}', mapping: Mapped("\u{47f}") },
    Range { from: '\u{47f}', to: '\u{47f}', mapping: Valid },
    Range { from: '\u{480}', to: '\u{480}', mapping: Mapped("\u{481}") },
    Range { from: '\u{481}', to: '\u{489}', mapping: Valid },
    Range { from: '\u{48a}', to: '\u{48a}', mapping: Mapped("\u{48b}") },
    Range { from: '\u{48b}', to: '\u{48b}', mapping: Valid },
    Range { from: '\u{48c}', to: '\u{48c}', mapping: Mapped("\u{48d}") },
    Range { from: '\u{48d}', to: '\u{48d}', mapping: Valid },
    Range { from: '\u{48e}', to: '\u{48e}', mapping: Mapped("\u{48f}") },
    Range { from: '\u{48f}', to: '\u{48f}', mapping: Valid },
    Range { from: '\u{490}', to: '\u{490}', mapping: Mapped("\u{491}") },
    Range { from: '\u{491}', to: '\u{491}', mapping: Valid },
    Range { from: '\u{492}', to: '\u{492}', mapping: Mapped("\u{493}") },
    Range { from: '\u{493}', to: '\u{493}', mapping: Valid },
    Range { from: '\u{494}', to: '\u{494}', mapping: Mapped("\u{495}") },
    Range { from: '\u{495}', to: '\u{495}', mapping: Valid },
    Range { from: '\u{496}', to: '\u{496}', mapping: Mapped("\u{497}") },
    Range { from: '\u{497}', to: '\u{497}', mapping: Valid },
    Range { from: '\u{498}', to: '\u{498}', mapping: Mapped("\u{499}") },
    Range { from: '\u{499}', to: '\u{499}', mapping: Valid },
    Range { from: '\u{49a}', to: '\u{49a}', mapping: Mapped("\u{49b}") },
    Range { from: '\u{49b}', to: '\u{49b}', mapping: Valid },
    Range { from: '\u{49c}', to: '\u{49c}', mapping: Mapped("\u{49d}") },
    Range { from: '\u{49d}', to: '\u{49d}', mapping: Valid },
    Range { from: '\u{49e}', to: '\u{49e}', mapping: Mapped("\u{49f}") },
    Range { from: '\u{49f}', to: '\u{49f}', mapping: Valid },
    Range { from: '\u{4a0}', to: '\u{4a0}', mapping: Mapped("\u{4a1}") },
    Range { from: '\u{4a1}', to: '\u{4a1}', mapping: Valid },
    Range { from: '\u{4a2}', to: '\u{4a2}', mapping: Mapped("\u{4a3}") },
    Range { from: '\u{4a3}', to: '\u{4a3}', mapping: Valid },
    Range { from: '\u{4a4}', to: '\u{4a4}', mapping: Mapped("\u{4a5}") },
    Range { from: '\u{4a5}', to: '\u{4a5}', mapping: Valid },
    Range { from: '\u{4a6}', to: '\u{4a6}', mapping: Mapped("\u{4a7}") },
    Range { from: '\u{4a7}', to: '\u{4a7}', mapping: Valid },
    Range { from: '\u{4a8}', to: '\u{4a8}', mapping: Mapped("\u{4a9}") },
    Range { from: '\u{4a9}', to: '\u{4a9}', mapping: Valid },
    Range { from: '\u{4aa}', to: '\u{4aa}', mapping: Mapped("\u{4ab}") },
    Range { from: '\u{4ab}', to: '\u{4ab}', mapping: Valid },
    Range { from: '\u{4ac}', to: '\u{4ac}', mapping: Mapped("\u{4ad}") },
    Range { from: '\u{4ad}', to: '\u{4ad}', mapping: Valid },
    Range { from: '\u{4ae}', to: '\u{4ae}', mapping: Mapped("\u{4af}") },
    Range { from: '\u{4af}', to: '\u{4af}', mapping: Valid },
    Range { from: '\u{4b0}', to: '\u{4b0}', mapping: Mapped("\u{4b1}") },
    Range { from: '\u{4b1}', to: '\u{4b1}', mapping: Valid },
    Range { from: '\u{4b2}', to: '\u{4b2}', mapping: Mapped("\u{4b3}") },
    Range { from: '\u{4b3}', to: '\u{4b3}', mapping: Valid },
    Range { from: '\u{4b4}', to: '\u{4b4}', mapping: Mapped("\u{4b5}") },
    Range { from: '\u{4b5}', to: '\u{4b5}', mapping: Valid },
    Range { from: '\u{4b6}', to: '\u{4b6}', mapping: Mapped("\u{4b7}") },
    Range { from: '\u{4b7}', to: '\u{4b7}', mapping: Valid },
    Range { from: '\u{4b8}', to: '\u{4b8}', mapping: Mapped("\u{4b9}") },
    Range { from: '\u{4b9}', to: '\u{4b9}', mapping: Valid },
    Range { from: '\u{4ba}', to: '\u{4ba}', mapping: Mapped("\u{4bb}") },
    Range { from: '\u{4bb}', to: '\u{4bb}', mapping: Valid },
    Range { from: '\u{4bc}', to: '\u{4bc}', mapping: Mapped("\u{4bd}") },
    Range { from: '\u{4bd}', to: '\u{4bd}', mapping: Valid },
    Range { from: '\u{4be}', to: '\u{4be}', mapping: Mapped("\u{4bf}") },
    Range { from: '\u{4bf}', to: '\u{4bf}', mapping: Valid },
    Range { from: '\u{4c0}', to: '\u{4c0}', mapping: Mapped("\u{4cf}") },
    Range { from: '\u{4c1}', to: '\u{4c1}', mapping: Mapped("\u{4c2}") },
    Range { from: '\u{4c2}', to: '\u{4c2}', mapping: Valid },
    Range { from: '\u{4c3}', to: '\u{4c3}', mapping: Mapped("\u{4c4}") },
    Range { from: '\u{4c4}', to: '\u{4c4}', mapping: Valid },
    Range { from: '\u{4c5}', to: '\u{4c5}', mapping: Mapped("\u{4c6}") },
    Range { from: '\u{4c6}', to: '\u{4c6}', mapping: Valid },
    Range { from: '\u{4c7}', to: '\u{4c7}', mapping: Mapped("\u{4c8}") },
    Range { from: '\u{4c8}', to: '\u{4c8}', mapping: Valid },
    Range { from: '\u{4c9}', to: '\u{4c9}', mapping: Mapped("\u{4ca}") },
    Range { from: '\u{4ca}', to: '\u{4ca}', mapping: Valid },
    Range { from: '\u{4cb}', to: '\u{4cb}', mapping: Mapped("\u{4cc}") },
    Range { from: '\u{4cc}', to: '\u{4cc}', mapping: Valid },
    Range { from: '\u{4cd}', to: '\u{4cd}', mapping: Mapped("\u{4ce}") },
    Range { from: '\u{4ce}', to: '\u{4cf}', mapping: Valid },
    Range { from: '\u{4d0}', to: '\u{4d0}', mapping: Mapped("\u{4d1}") },
    Range { from: '\u{4d1}', to: '\u{4d1}', mapping: Valid },
    Range { from: '\u{4d2}', to: '\u{4d2}', mapping: Mapped("\u{4d3}") },
    Range { from: '\u{4d3}', to: '\u{4d3}', mapping: Valid },
    Range { from: '\u{4d4}', to: '\u{4d4}', mapping: Mapped("\u{4d5}") },
    Range { from: '\u{4d5}', to: '\u{4d5}', mapping: Valid },
    Range { from: '\u{4d6}', to: '\u{4d6}', mapping: Mapped("\u{4d7}") },
    Range { from: '\u{4d7}', to: '\u{4d7}', mapping: Valid },
    Range { from: '\u{4d8}', to: '\u{4d8}', mapping: Mapped("\u{4d9}") },
    Range { from: '\u{4d9}', to: '\u{4d9}', mapping: Valid },
    Range { from: '\u{4da}', to: '\u{4da}', mapping: Mapped("\u{4db}") },
    Range { from: '\u{4db}', to: '\u{4db}', mapping: Valid },
    Range { from: '\u{4dc}', to: '\u{4dc}', mapping: Mapped("\u{4dd}") },
    Range { from: '\u{4dd}', to: '\u{4dd}', mapping: Valid },
    Range { from: '\u{4de}', to: '\u{4de}', mapping: Mapped("\u{4df}") },
    Range { from: '\u{4df}', to: '\u{4df}', mapping: Valid },
    Range { from: '\u{4e0}', to: '\u{4e0}', mapping: Mapped("\u{4e1}") },
    Range { from: '\u{4e1}', to: '\u{4e1}', mapping: Valid },
    Range { from: '\u{4e2}', to: '\u{4e2}', mapping: Mapped("\u{4e3}") },
    Range { from: '\u{4e3}', to: '\u{4e3}', mapping: Valid },
    Range { from: '\u{4e4}', to: '\u{4e4}', mapping: Mapped("\u{4e5}") },
    Range { from: '\u{4e5}', to: '\u{4e5}', mapping: Valid },
    Range { from: '\u{4e6}', to: '\u{4e6}', mapping: Mapped("\u{4e7}") },
    Range { from: '\u{4e7}', to: '\u{4e7}', mapping: Valid },
    Range { from: '\u{4e8}', to: '\u{4e8}', mapping: Mapped("\u{4e9}") },
    Range { from: '\u{4e9}', to: '\u{4e9}', mapping: Valid },
    Range { from: '\u{4ea}', to: '\u{4ea}', mapping: Mapped("\u{4eb}") },
    Range { from: '\u{4eb}', to: '\u{4eb}', mapping: Valid },
    Range { from: '\u{4ec}', to: '\u{4ec}', mapping: Mapped("\u{4ed}") },
    Range { from: '\u{4ed}', to: '\u{4ed}', mapping: Valid },
    Range { from: '\u{4ee}', to: '\u{4ee}', mapping: Mapped("\u{4ef}") },
    Range { from: '\u{4ef}', to: '\u{4ef}', mapping: Valid },
    Range { from: '\u{4f0}', to: '\u{4f0}', mapping: Mapped("\u{4f1}") },
    Range { from: '\u{4f1}', to: '\u{4f1}', mapping: Valid },
    Range { from: '\u{4f2}', to: '\u{4f2}', mapping: Mapped("\u{4f3}") },
    Range { from: '\u{4f3}', to: '\u{4f3}', mapping: Valid },
    Range { from: '\u{4f4}', to: '\u{4f4}', mapping: Mapped("\u{4f5}") },
    Range { from: '\u{4f5}', to: '\u{4f5}', mapping: Valid },
    Range { from: '\u{4f6}', to: '\u{4f6}', mapping: Mapped("\u{4f7}") },
    Range { from: '\u{4f7}', to: '\u{4f7}', mapping: Valid },
    Range { from: '\u{4f8}', to: '\u{4f8}', mapping: Mapped("\u{4f9}") },
    Range { from: '\u{4f9}', to: '\u{4f9}', mapping: Valid },
    Range { from: '\u{4fa}', to: '\u{4fa}', mapping: Mapped("\u{4fb}") },
    Range { from: '\u{4fb}', to: '\u{4fb}', mapping: Valid },
    Range { from: '\u{4fc}', to: '\u{4fc}', mapping: Mapped("\u{4fd}") },
    Range { from: '\u{4fd}', to: '\u{4fd}', mapping: Valid },
    Range { from: '\u{4fe}', to: '\u{4fe}', mapping: Mapped("\u{4ff}") },
    Range { from: '\u{4ff}', to: '\u{4ff}', mapping: Valid },
    Range { from: '\u{500}', to: '\u{500}', mapping: Mapped("\u{501}") },
    Range { from: '\u{501}', to: '\u{501}', mapping: Valid },
    Range { from: '\u{502}', to: '\u{502}', mapping: Mapped("\u{503}") },
    Range { from: '\u{503}', to: '\u{503}', mapping: Valid },
    Range { from: '\u{504}', to: '\u{504}', mapping: Mapped("\u{505}") },
    Range { from: '\u{505}', to: '\u{505}', mapping: Valid },
    Range { from: '\u{506}', to: '\u{506}', mapping: Mapped("\u{507}") },
    Range { from: '\u{507}', to: '\u{507}', mapping: Valid },
    Range { from: '\u{508}', to: '\u{508}', mapping: Mapped("\u{509}") },
    Range { from: '\u{509}', to: '\u{509}', mapping: Valid },
    Range { from: '\u{50a}', to: '\u{50a}', mapping: Mapped("\u{50b}") },
    Range { from: '\u{50b}', to: '\u{50b}', mapping: Valid },
    Range { from: '\u{50c}', to: '\u{50c}', mapping: Mapped("\u{50d}") },
    Range { from: '\u{50d}', to: '\u{50d}', mapping: Valid },
    Range { from: '\u{50e}', to: '\u{50e}', mapping: Mapped("\u{50f}") },
    Range { from: '\u{50f}', to: '\u{50f}', mapping: Valid },
    Range { from: '\u{510}', to: '\u{510}', mapping: Mapped("\u{511}") },
    Range { from: '\u{511}', to: '\u{511}', mapping: Valid },
    Range { from: '\u{512}', to: '\u{512}', mapping: Mapped("\u{513}") },
    Range { from: '\u{513}', to: '\u{513}', mapping: Valid },
    Range { from: '\u{514}', to: '\u{514}', mapping: Mapped("\u{515}") },
    Range { from: '\u{515}', to: '\u{515}', mapping: Valid },
    Range { from: '\u{516}', to: '\u{516}', mapping: Mapped("\u{517}") },
    Range { from: '\u{517}', to: '\u{517}', mapping: Valid },
    Range { from: '\u{518}', to: '\u{518}', mapping: Mapped("\u{519}") },
    Range { from: '\u{519}', to: '\u{519}', mapping: Valid },
    Range { from: '\u{51a}', to: '\u{51a}', mapping: Mapped("\u{51b}") },
    Range { from: '\u{51b}', to: '\u{51b}', mapping: Valid },
    Range { from: '\u{51c}', to: '\u{51c}', mapping: Mapped("\u{51d}") },
    Range { from: '\u{51d}', to: '\u{51d}', mapping: Valid },
    Range { from: '\u{51e}', to: '\u{51e}', mapping: Mapped("\u{51f}") },
    Range { from: '\u{51f}', to: '\u{51f}', mapping: Valid },
    Range { from: '\u{520}', to: '\u{520}', mapping: Mapped("\u{521}") },
    Range { from: '\u{521}', to: '\u{521}', mapping: Valid },
    Range { from: '\u{522}', to: '\u{522}', mapping: Mapped("\u{523}") },
    Range { from: '\u{523}', to: '\u{523}', mapping: Valid },
    Range { from: '\u{524}', to: '\u{524}', mapping: Mapped("\u{525}") },
    Range { from: '\u{525}', to: '\u{525}', mapping: Valid },
    Range { from: '\u{526}', to: '\u{526}', mapping: Mapped("\u{527}") },
    Range { from: '\u{527}', to: '\u{527}', mapping: Valid },
    Range { from: '\u{528}', to: '\u{528}', mapping: Mapped("\u{529}") },
    Range { from: '\u{529}', to: '\u{529}', mapping: Valid },
    Range { from: '\u{52a}', to: '\u{52a}', mapping: Mapped("\u{52b}") },
    Range { from: '\u{52b}', to: '\u{52b}', mapping: Valid },
    Range { from: '\u{52c}', to: '\u{52c}', mapping: Mapped("\u{52d}") },
    Range { from: '\u{52d}', to: '\u{52d}', mapping: Valid },
    Range { from: '\u{52e}', to: '\u{52e}', mapping: Mapped("\u{52f}") },
    Range { from: '\u{52f}', to: '\u{52f}', mapping: Valid },
    Range { from: '\u{531}', to: '\u{531}', mapping: Mapped("\u{561}") },
    Range { from: '\u{532}', to: '\u{532}', mapping: Mapped("\u{562}") },
    Range { from: '\u{533}', to: '\u{533}', mapping: Mapped("\u{563}") },
    Range { from: '\u{534}', to: '\u{534}', mapping: Mapped("\u{564}") },
    Range { from: '\u{535}', to: '\u{535}', mapping: Mapped("\u{565}") },
    Range { from: '\u{536}', to: '\u{536}', mapping: Mapped("\u{566}") },
    Range { from: '\u{537}', to: '\u{537}', mapping: Mapped("\u{567}") },
    Range { from: '\u{538}', to: '\u{538}', mapping: Mapped("\u{568}") },
    Range { from: '\u{539}', to: '\u{539}', mapping: Mapped("\u{569}") },
    Range { from: '\u{53a}', to: '\u{53a}', mapping: Mapped("\u{56a}") },
    Range { from: '\u{53b}', to: '\u{53b}', mapping: Mapped("\u{56b}") },
    Range { from: '\u{53c}', to: '\u{53c}', mapping: Mapped("\u{56c}") },
    Range { from: '\u{53d}', to: '\u{53d}', mapping: Mapped("\u{56d}") },
    Range { from: '\u{53e}', to: '\u{53e}', mapping: Mapped("\u{56e}") },
    Range { from: '\u{53f}', to: '\u{53f}', mapping: Mapped("\u{56f}") },
    Range { from: '\u{540}', to: '\u{540}', mapping: Mapped("\u{570}") },
    Range { from: '\u{541}', to: '\u{541}', mapping: Mapped("\u{571}") },
    Range { from: '\u{542}', to: '\u{542}', mapping: Mapped("\u{572}") },
    Range { from: '\u{543}', to: '\u{543}', mapping: Mapped("\u{573}") },
    Range { from: '\u{544}', to: '\u{544}', mapping: Mapped("\u{574}") },
    Range { from: '\u{545}', to: '\u{545}', mapping: Mapped("\u{575}") },
    Range { from: '\u{546}', to: '\u{546}', mapping: Mapped("\u{576}") },
    Range { from: '\u{547}', to: '\u{547}', mapping: Mapped("\u{577}") },
    Range { from: '\u{548}', to: '\u{548}', mapping: Mapped("\u{578}") },
    Range { from: '\u{549}', to: '\u{549}', mapping: Mapped("\u{579}") },
    Range { from: '\u{54a}', to: '\u{54a}', mapping: Mapped("\u{57a}") },
    Range { from: '\u{54b}', to: '\u{54b}', mapping: Mapped("\u{57b}") },
    Range { from: '\u{54c}', to: '\u{54c}', mapping: Mapped("\u{57c}") },
    Range { from: '\u{54d}', to: '\u{54d}', mapping: Mapped("\u{57d}") },
    Range { from: '\u{54e}', to: '\u{54e}', mapping: Mapped("\u{57e}") },
    Range { from: '\u{54f}', to: '\u{54f}', mapping: Mapped("\u{57f}") },
    Range { from: '\u{550}', to: '\u{550}', mapping: Mapped("\u{580}") },
    Range { from: '\u{551}', to: '\u{551}', mapping: Mapped("\u{581}") },
    Range { from: '\u{552}', to: '\u{552}', mapping: Mapped("\u{582}") },
    Range { from: '\u{553}', to: '\u{553}', mapping: Mapped("\u{583}") },
    Range { from: '\u{554}', to: '\u{554}', mapping: Mapped("\u{584}") },
    Range { from: '\u{555}', to: '\u{555}', mapping: Mapped("\u{585}") },
    Range { from: '\u{556}', to: '\u{556}', mapping: Mapped("\u{586}") },
    Range { from: '\u{559}', to: '\u{586}', mapping: Valid },
    Range { from: '\u{587}', to: '\u{587}', mapping: Mapped("\u{565}\u{582}") },
    Range { from: '\u{588}', to: '\u{58a}', mapping: Valid },
    Range { from: '\u{58d}', to: '\u{58f}', mapping: Valid },
    Range { from: '\u{591}', to: '\u{5c7}', mapping: Valid },
    Range { from: '\u{5d0}', to: '\u{5ea}', mapping: Valid },
    Range { from: '\u{5ef}', to: '\u{5f4}', mapping: Valid },
    Range { from: '\u{606}', to: '\u{61b}', mapping: Valid },
    Range { from: '\u{61d}', to: '\u{674}', mapping: Valid },
    Range { from: '\u{675}', to: '\u{675}', mapping: Mapped("\u{627}\u{674}") },
    Range { from: '\u{676}', to: '\u{676}', mapping: Mapped("\u{648}\u{674}") },
    Range { from: '\u{677}', to: '\u{677}', mapping: Mapped("\u{6c7}\u{674}") },
    Range { from: '\u{678}', to: '\u{678}', mapping: Mapped("\u{64a}\u{674}") },
    Range { from: '\u{679}', to: '\u{6dc}', mapping: Valid },
    Range { from: '\u{6de}', to: '\u{6ff}', mapping: Valid },
    Range { from: '\u{900}', to: '\u{957}', mapping: Valid },
    Range { from: '\u{958}', to: '\u{958}', mapping: Mapped("\u{915}\u{93c}") },
    Range { from: '\u{959}', to: '\u{959}', mapping: Mapped("\u{916}\u{93c}") },
    Range { from: '\u{95a}', to: '\u{95a}', mapping: Mapped("\u{917}\u{93c}") },
    Range { from: '\u{95b}', to: '\u{95b}', mapping: Mapped("\u{91c}\u{93c}") },
    Range { from: '\u{95c}', to: '\u{95c}', mapping: Mapped("\u{921}\u{93c}") },
    Range { from: '\u{95d}', to: '\u{95d}', mapping: Mapped("\u{922}\u{93c}") },
    Range { from: '\u{95e}', to: '\u{95e}', mapping: Mapped("\u{92b}\u{93c}") },
    Range { from: '\u{95f}', to: '\u{95f}', mapping: Mapped("\u{92f}\u{93c}") },
    Range { from: '\u{960}', to: '\u{97f}', mapping: Valid },
    Range { from: '\u{e01}', to: '\u{e32}', mapping: Valid },
    Range { from: '\u{e33}', to: '\u{e33}', mapping: Mapped("\u{e4d}\u{e32}") },
    Range { from: '\u{e34}', to: '\u{e3a}', mapping: Valid },
    Range { from: '\u{e3f}', to: '\u{e5b}', mapping: Valid },
    Range { from: '\u{1e00}', to: '\u{1e00}', mapping: Mapped("\u{1e01}") },
    Range { from: '\u{1e01}', to: '\u{1e01}', mapping: Valid },
    Range { from: '\u{1e02}', to: '\u{1e02}', mapping: Mapped("\u{1e03}") },
    Range { from: '\u{1e03}', to: '\u{1e03}', mapping: Valid },
    Range { from: '\u{1e04}', to: '\u{1e04}', mapping: Mapped("\u{1e05}") },
    Range { from: '\u{1e05}', to: '\u{1e05}', mapping: Valid },
    Range { from: '\u{1e06}', to: '\u{1e06}', mapping: Mapped("\u{1e07}") },
    Range { from: '\u{1e07}', to: '\u{1e07}', mapping: Valid },
    Range { from: '\u{1e08}', to: '\u{1e08}', mapping: Mapped("\u{1e09}") },
    Range { from: '\u{1e09}', to: '\u{1e09}', mapping: Valid },
    Range { from: '\u{1e0a}', to: '\u{1e0a}', mapping: Mapped("\u{1e0b}") },
    Range { from: '\u{1e0b}', to: '\u{1e0b}', mapping: Valid },
    Range { from: '\u{1e0c}', to: '\u{1e0c}', mapping: Mapped("\u{1e0d}") },
    Range { from: '\u{1e0d}', to: '\u{1e0d}', mapping: Valid },
    Range { from: '\u{1e0e}', to: '\u{1e0e}', mapping: Mapped("\u{1e0f}") },
    Range { from: '\u{1e0f}', to: '\u{1e0f}', mapping: Valid },
    Range { from: '\u{1e10}', to: '\u{1e10}', mapping: Mapped("\u{1e11}") },
    Range { from: '\u{1e11}', to: '\u{1e11}', mapping: Valid },
    Range { from: '\u{1e12}', to: '\u{1e12}', mapping: Mapped("\u{1e13}") },
    Range { from: '\u{1e13}', to: '\u{1e13}', mapping: Valid },
    Range { from: '\u{1e14}', to: '\u{1e14}', mapping: Mapped("\u{1e15}") },
    Range { from: '\u{1e15}', to: '\u{1e15}', mapping: Valid },
    Range { from: '\u{1e16}', to: '\u{1e16}', mapping: Mapped("\u{1e17}") },
    Range { from: '\u{1e17}', to: '\u{1e17}', mapping: Valid },
    Range { from: '\u{1e18}', to: '\u{1e18}', mapping: Mapped("\u{1e19}") },
    Range { from: '\u{1e19}', to: '\u{1e19}', mapping: Valid },
    Range { from: '\u{1e1a}', to: '\u{1e1a}', mapping: Mapped("\u{1e1b}") },
    Range { from: '\u{1e1b}', to: '\u{1e1b}', mapping: Valid },
    Range { from: '\u{1e1c}', to: '\u{1e1c}', mapping: Mapped("\u{1e1d}") },
    Range { from: '\u{1e1d}', to: '\u{1e1d}', mapping: Valid },
    Range { from: '\u{1e1e}', to: '\u{1e1e}', mapping: Mapped("\u{1e1f}") },
    Range { from: '\u{1e1f}', to: '\u{1e1f}', mapping: Valid },
    Range { from: '\u{1e20}', to: '\u{1e20}', mapping: Mapped("\u{1e21}") },
    Range { from: '\u{1e21}', to: '\u{1e21}', mapping: Valid },
    Range { from: '\u{1e22}', to: '\u{1e22}', mapping: Mapped("\u{1e23}") },
    Range { from: '\u{1e23}', to: '\u{1e23}', mapping: Valid },
    Range { from: '\u{1e24}', to: '\u{1e24}', mapping: Mapped("\u{1e25}") },
    Range { from: '\u{1e25}', to: '\u{1e25}', mapping: Valid },
    Range { from: '\u{1e26}', to: '\u{1e26}', mapping: Mapped("\u{1e27}") },
    Range { from: '\u{1e27}', to: '\u{1e27}', mapping: Valid },
    Range { from: '\u{1e28}', to: '\u{1e28}', mapping: Mapped("\u{1e29}") },
    Range { from: '\u{1e29}', to: '\u{1e29}', mapping: Valid },
    Range { from: '\u{1e2a}', to: '\u{1e2a}', mapping: Mapped("\u{1e2b}") },
    Range { from: '\u{1e2b}', to: '\u{1e2b}', mapping: Valid },
    Range { from: '\u{1e2c}', to: '\u{1e2c}', mapping: Mapped("\u{1e2d}") },
    Range { from: '\u{1e2d}', to: '\u{1e2d}', mapping: Valid },
    Range { from: '\u{1e2e}', to: '\u{1e2e}', mapping: Mapped("\u{1e2f}") },
    Range { from: '\u{1e2f}', to: '\u{1e2f}', mapping: Valid },
    Range { from: '\u{1e30}', to: '\u{1e30}', mapping: Mapped("\u{1e31}") },
    Range { from: '\u{1e31}', to: '\u{1e31}', mapping: Valid },
    Range { from: '\u{1e32}', to: '\u{1e32}', mapping: Mapped("\u{1e33}") },
    Range { from: '\u{1e33}', to: '\u{1e33}', mapping: Valid },
    Range { from: '\u{1e34}', to: '\u{1e34}', mapping: Mapped("\u{1e35}") },
    Range { from: '\u{1e35}', to: '\u{1e35}', mapping: Valid },
    Range { from: '\u{1e36}', to: '\u{1e36}', mapping: Mapped("\u{1e37}") },
    Range { from: '\u{1e37}', to: '\u{1e37}', mapping: Valid },
    Range { from: '\u{1e38}', to: '\u{1e38}', mapping: Mapped("\u{1e39}") },
    Range { from: '\u{1e39}', to: '\u{1e39}', mapping: Valid },
    Range { from: '\u{1e3a}', to: '\u{1e3a}', mapping: Mapped("\u{1e3b}") },
    Range { from: '\u{1e3b}', to: '\u{1e3b}', mapping: Valid },
    Range { from: '\u{1e3c}', to: '\u{1e3c}', mapping: Mapped("\u{1e3d}") },
    Range { from: '\u{1e3d}', to: '\u{1e3d}', mapping: Valid },
    Range { from: '\u{1e3e}', to: '\u{1e3e}', mapping: Mapped("\u{1e3f}") },
    Range { from: '\u{1e3f}', to: '\u{1e3f}', mapping: Valid },
    Range { from: '\u{1e40}', to: '\u{1e40}', mapping: Mapped("\u{1e41}") },
    Range { from: '\u{1e41}', to: '\u{1e41}', mapping: Valid },
    Range { from: '\u{1e42}', to: '\u{1e42}', mapping: Mapped("\u{1e43}") },
    Range { from: '\u{1e43}', to: '\u{1e43}', mapping: Valid },
    Range { from: '\u{1e44}', to: '\u{1e44}', mapping: Mapped("\u{1e45}") },
    Range { from: '\u{1e45}', to: '\u{1e45}', mapping: Valid },
    Range { from: '\u{1e46}', to: '\u{1e46}', mapping: Mapped("\u{1e47}") },
    Range { from: '\u{1e47}', to: '\u{1e47}', mapping: Valid },
    Range { from: '\u{1e48}', to: '\u{1e48}', mapping: Mapped("\u{1e49}") },
    Range { from: '\u{1e49}', to: '\u{1e49}', mapping: Valid },
    Range { from: '\u{1e4a}', to: '\u{1e4a}', mapping: Mapped("\u{1e4b}") },
    Range { from: '\u{1e4b}', to: '\u{1e4b}', mapping: Valid },
    Range { from: '\u{1e4c}', to: '\u{1e4c}', mapping: Mapped("\u{1e4d}") },
    Range { from: '\u{1e4d}', to: '\u{1e4d}', mapping: Valid },
    Range { from: '\u{1e4e}', to: '\u{1e4e}', mapping: Mapped("\u{1e4f}") },
    Range { from: '\u{1e4f}', to: '\u{1e4f}', mapping: Valid },
    Range { from: '\u{1e50}', to: '\u{1e50}', mapping: Mapped("\u{1e51}") },
    Range { from: '\u{1e51}', to: '\u{1e51}', mapping: Valid },
    Range { from: '\u{1e52}', to: '\u{1e52}', mapping: Mapped("\u{1e53}") },
    Range { from: '\u{1e53}', to: '\u{1e53}', mapping: Valid },
    Range { from: '\u{1e54}', to: '\u{1e54}', mapping: Mapped("\u{1e55}") },
    Range { from: '\u{1e55}', to: '\u{1e55}', mapping: Valid },
    Range { from: '\u{1e56}', to: '\u{1e56}', mapping: Mapped("\u{1e57}") },
    Range { from: '\u{1e57}', to: '\u{1e57}', mapping: Valid },
    Range { from: '\u{1e58}', to: '\u{1e58}', mapping: Mapped("\u{1e59}") },
    Range { from: '\u{1e59}', to: '\u{1e59}', mapping: Valid },
    Range { from: '\u{1e5a}', to: '\u{1e5a}', mapping: Mapped("\u{1e5b}") },
    Range { from: '\u{1e5b}', to: '\u{1e5b}', mapping: Valid },
    Range { from: '\u{1e5c}', to: '\u{1e5c}', mapping: Mapped("\u{1e5d}") },
    Range { from: '\u{1e5d}', to: '\u{1e5d}', mapping: Valid },
    Range { from: '\u{1e5e}', to: '\u{1e5e}', mapping: Mapped("\u{1e5f}") },
    Range { from: '\u{1e5f}', to: '\u{1e5f}', mapping: Valid },
    Range { from: '\u{1e60}', to: '\u{1e60}', mapping: Mapped("\u{1e61}") },
    Range { from: '\u{1e61}', to: '\u{1e61}', mapping: Valid },
    Range { from: '\u{1e62}', to: '\u{1e62}', mapping: Mapped("\u{1e63}") },
    Range { from: '\u{1e63}', to: '\u{1e63}', mapping: Valid },
    Range { from: '\u{1e64}', to: '\u{1e64}', mapping: Mapped("\u{1e65}") },
    Range { from: '\u{1e65}', to: '\u{1e65}', mapping: Valid },
    Range { from: '\u{1e66}', to: '\u{1e66}', mapping: Mapped("\u{1e67}") },
    Range { from: '\u{1e67}', to: '\u{1e67}', mapping: Valid },
    Range { from: '\u{1e68}', to: '\u{1e68}', mapping: Mapped("\u{1e69}") },
    Range { from: '\u{1e69}', to: '\u{1e69}', mapping: Valid },
    Range { from: '\u{1e6a}', to: '\u{1e6a}', mapping: Mapped("\u{1e6b}") },
    Range { from: '\u{1e6b}', to: '\u{1e6b}', mapping: Valid },
    Range { from: '\u{1e6c}', to: '\u{1e6c}', mapping: Mapped("\u{1e6d}") },
    Range { from: '\u{1e6d}', to: '\u{1e6d}', mapping: Valid },
    Range { from: '\u{1e6e}', to: '\u{1e6e}', mapping: Mapped("\u{1e6f}") },
    Range { from: '\u{1e6f}', to: '\u{1e6f}', mapping: Valid },
    Range { from: '\u{1e70}', to: '\u{1e70}', mapping: Mapped("\u{1e71}") },
    Range { from: '\u{1e71}', to: '\u{1e71}', mapping: Valid },
    Range { from: '\u{1e72}', to: '\u{1e72}', mapping: Mapped("\u{1e73}") },
    Range { from: '\u{1e73}', to: '\u{1e73}', mapping: Valid },
    Range { from: '\u{1e74}', to: '\u{1e74}', mapping: Mapped("\u{1e75}") },
    Range { from: '\u{1e75}', to: '\u{1e75}', mapping: Valid },
    Range { from: '\u{1e76}', to: '\u{1e76}', mapping: Mapped("\u{1e77}") },
    Range { from: '\u{1e77}', to: '\u{1e77}', mapping: Valid },
    Range { from: '\u{1e78}', to: '\u{1e78}', mapping: Mapped("\u{1e79}") },
    Range { from: '\u{1e79}', to: '\u{1e79}', mapping: Valid },
    Range { from: '\u{1e7a}', to: '\u{1e7a}', mapping: Mapped("\u{1e7b}") },
    Range { from: '\u{1e7b}', to: '\u{1e7b}', mapping: Valid },
    Range { from: '\u{1e7c}', to: '\u{1e7c}', mapping: Mapped("\u{1e7d}") },
    Range { from: '\u{1e7d}', to: '\u{1e7d}', mapping: Valid },
    Range { from: '\u{1e7e}', to: '\u{1e7e}', mapping: Mapped("\u{1e7f}") },
    Range { from: '\u{1e7f}', to: '\u{1e7f}', mapping: Valid },
    Range { from: '\u{1e80}', to: '\u{1e80}', mapping: Mapped("\u{1e81}") },
    Range { from: '\u{1e81}', to: '\u{1e81}', mapping: Valid },
    Range { from: '\u{1e82}', to: '\u{1e82}', mapping: Mapped("\u{1e83}") },
    Range { from: '\u{1e83}', to: '\u{1e83}', mapping: Valid },
    Range { from: '\u{1e84}', to: '\u{1e84}', mapping: Mapped("\u{1e85}") },
    Range { from: '\u{1e85}', to: '\u{1e85}', mapping: Valid },
    Range { from: '\u{1e86}', to: '\u{1e86}', mapping: Mapped("\u{1e87}") },
    Range { from: '\u{1e87}', to: '\u{1e87}', mapping: Valid },
    Range { from: '\u{1e88}', to: '\u{1e88}', mapping: Mapped("\u{1e89}") },
    Range { from: '\u{1e89}', to: '\u{1e89}', mapping: Valid },
    Range { from: '\u{1e8a}', to: '\u{1e8a}', mapping: Mapped("\u{1e8b}") },
    Range { from: '\u{1e8b}', to: '\u{1e8b}', mapping: Valid },
    Range { from: '\u{1e8c}', to: '\u{1e8c}', mapping: Mapped("\u{1e8d}") },
    Range { from: '\u{1e8d}', to: '\u{1e8d}', mapping: Valid },
    Range { from: '\u{1e8e}', to: '\u{1e8e}', mapping: Mapped("\u{1e8f}") },
    Range { from: '\u{1e8f}', to: '\u{1e8f}', mapping: Valid },
    Range { from: '\u{1e90}', to: '\u{1e90}', mapping: Mapped("\u{1e91}") },
    Range { from: '\u{1e91}', to: '\u{1e91}', mapping: Valid },
    Range { from: '\u{1e92}', to: '\u{1e92}', mapping: Mapped("\u{1e93}") },
    Range { from: '\u{1e93}', to: '\u{1e93}', mapping: Valid },
    Range { from: '\u{1e94}', to: '\u{1e94}', mapping: Mapped("\u{1e95}") },
    Range { from: '\u{1e95}', to: '\u{1e99}', mapping: Valid },
    Range { from: '\u{1e9a}', to: '\u{1e9a}', mapping: Mapped("\u{61}\u{2be}") },
    Range { from: '\u{1e9b}', to: '\u{1e9b}', mapping: Mapped("\u{1e61}") },
    Range { from: '\u{1e9c}', to: '\u{1e9d}', mapping: Valid },
    Range { from: '\u{1e9e}', to: '\u{1e9e}', mapping: Mapped("\u{73}\u{73}") },
    Range { from: '\u{1e9f}', to: '\u{1e9f}', mapping: Valid },
    Range { from: '\u{1ea0}', to: '\u{1ea0}', mapping: Mapped("\u{1ea1}") },
    Range { from: '\u{1ea1}', to: '\u{1ea1}', mapping: Valid },
    Range { from: '\u{1ea2}', to: '\u{1ea2}', mapping: Mapped("\u{1ea3}") },
    Range { from: '\u{1ea3}', to: '\u{1ea3}', mapping: Valid },
    Range { from: '\u{1ea4}', to: '\u{1ea4}', mapping: Mapped("\u{1ea5}") },
    Range { from: '\u{1ea5}', to: '\u{1ea5}', mapping: Valid },
    Range { from: '\u{1ea6}', to: '\u{1ea6}', mapping: Mapped("\u{1ea7}") },
    Range { from: '\u{1ea7}', to: '\u{1ea7}', mapping: Valid },
    Range { from: '\u{1ea8}', to: '\u{1ea8}', mapping: Mapped("\u{1ea9}") },
    Range { from: '\u{1ea9}', to: '\u{1ea9}', mapping: Valid },
    Range { from: '\u{1eaa}', to: '\u{1eaa}', mapping: Mapped("\u{1eab}") },
    Range { from: '\u{1eab}', to: '\u{1eab}', mapping: Valid },
    Range { from: '\u{1eac}', to: '\u{1eac}', mapping: Mapped("\u{1ead}") },
    Range { from: '\u{1ead}', to: '\u{1ead}', mapping: Valid },
    Range { from: '\u{1eae}', to: '\u{1eae}', mapping: Mapped("\u{1eaf}") },
    Range { from: '\u{1eaf}', to: '\u{1eaf}', mapping: Valid },
    Range { from: '\u{1eb0}', to: '\u{1eb0}', mapping: Mapped("\u{1eb1}") },
    Range { from: '\u{1eb1}', to: '\u{1eb1}', mapping: Valid },
    Range { from: '\u{1eb2}', to: '\u{1eb2}', mapping: Mapped("\u{1eb3}") },
    Range { from: '\u{1eb3}', to: '\u{1eb3}', mapping: Valid },
    Range { from: '\u{1eb4}', to: '\u{1eb4}', mapping: Mapped("\u{1eb5}") },
    Range { from: '\u{1eb5}', to: '\u{1eb5}', mapping: Valid },
    Range { from: '\u{1eb6}', to: '\u{1eb6}', mapping: Mapped("\u{1eb7}") },
    Range { from: '\u{1eb7}', to: '\u{1eb7}', mapping: Valid },
    Range { from: '\u{1eb8}', to: '\u{1eb8}', mapping: Mapped("\u{1eb9}") },
    Range { from: '\u{1eb9}', to: '\u{1eb9}', mapping: Valid },
    Range { from: '\u{1eba}', to: '\u{1eba}', mapping: Mapped("\u{1ebb}") },
    Range { from: '\u{1ebb}', to: '\u{1ebb}', mapping: Valid },
    Range { from: '\u{1ebc}', to: '\u{1ebc}', mapping: Mapped("\u{1ebd}") },
    Range { from: '\u{1ebd}', to: '\u{1ebd}', mapping: Valid },
    Range { from: '\u{1ebe}', to: '\u{1ebe}', mapping: Mapped("\u{1ebf}") },
    Range { from: '\u{1ebf}', to: '\u{1ebf}', mapping: Valid },
    Range { from: '\u{1ec0}', to: '\u{1ec0}', mapping: Mapped("\u{1ec1}") },
    Range { from: '\u{1ec1}', to: '\u{1ec1}', mapping: Valid },
    Range { from: '\u{1ec2}', to: '\u{1ec2}', mapping: Mapped("\u{1ec3}") },
    Range { from: '\u{1ec3}', to: '\u{1ec3}', mapping: Valid },
    Range { from: '\u{1ec4}', to: '\u{1ec4}', mapping: Mapped("\u{1ec5}") },
    Range { from: '\u{1ec5}', to: '\u{1ec5}', mapping: Valid },
    Range { from: '\u{1ec6}', to: '\u{1ec6}', mapping: Mapped("\u{1ec7}") },
    Range { from: '\u{1ec7}', to: '\u{1ec7}', mapping: Valid },
    Range { from: '\u{1ec8}', to: '\u{1ec8}', mapping: Mapped("\u{1ec9}") },
    Range { from: '\u{1ec9}', to: '\u{1ec9}', mapping: Valid },
    Range { from: '\u{1eca}', to: '\u{1eca}', mapping: Mapped("\u{1ecb}") },
    Range { from: '\u{1ecb}', to: '\u{1ecb}', mapping: Valid },
    Range { from: '\u{1ecc}', to: '\u{1ecc}', mapping: Mapped("\u{1ecd}") },
    Range { from: '\u{1ecd}', to: '\u{1ecd}', mapping: Valid },
    Range { from: '\u{1ece}', to: '\u{1ece}', mapping: Mapped("\u{1ecf}") },
    Range { from: '\u{1ecf}', to: '\u{1ecf}', mapping: Valid },
    Range { from: '\u{1ed0}', to: '\u{1ed0}', mapping: Mapped("\u{1ed1}") },
    Range { from: '\u{1ed1}', to: '\u{1ed1}', mapping: Valid },
    Range { from: '\u{1ed2}', to: '\u{1ed2}', mapping: Mapped("\u{1ed3}") },
    Range { from: '\u{1ed3}', to: '\u{1ed3}', mapping: Valid },
    Range { from: '\u{1ed4}', to: '\u{1ed4}', mapping: Mapped("\u{1ed5}") },
    Range { from: '\u{1ed5}', to: '\u{1ed5}', mapping: Valid },
    Range { from: '\u{1ed6}', to: '\u{1ed6}', mapping: Mapped("\u{1ed7}") },
    Range { from: '\u{1ed7}', to: '\u{1ed7}', mapping: Valid },
    Range { from: '\u{1ed8}', to: '\u{1ed8}', mapping: Mapped("\u{1ed9}") },
    Range { from: '\u{1ed9}', to: '\u{1ed9}', mapping: Valid },
    Range { from: '\u{1eda}', to: '\u{1eda}', mapping: Mapped("\u{1edb}") },
    Range { from: '\u{1edb}', to: '\u{1edb}', mapping: Valid },
    Range { from: '\u{1edc}', to: '\u{1edc}', mapping: Mapped("\u{1edd}") },
    Range { from: '\u{1edd}', to: '\u{1edd}', mapping: Valid },
    Range { from: '\u{1ede}', to: '\u{1ede}', mapping: Mapped("\u{1edf}") },
    Range { from: '\u{1edf}', to: '\u{1edf}', mapping: Valid },
    Range { from: '\u{1ee0}', to: '\u{1ee0}', mapping: Mapped("\u{1ee1}") },
    Range { from: '\u{1ee1}', to: '\u{1ee1}', mapping: Valid },
    Range { from: '\u{1ee2}', to: '\u{1ee2}', mapping: Mapped("\u{1ee3}") },
    Range { from: '\u{1ee3}', to: '\u{1ee3}', mapping: Valid },
    Range { from: '\u{1ee4}', to: '\u{1ee4}', mapping: Mapped("\u{1ee5}") },
    Range { from: '\u{1ee5}', to: '\u{1ee5}', mapping: Valid },
    Range { from: '\u{1ee6}', to: '\u{1ee6}', mapping: Mapped("\u{1ee7}") },
    Range { from: '\u{1ee7}', to: '\u{1ee7}', mapping: Valid },
    Range { from: '\u{1ee8}', to: '\u{1ee8}', mapping: Mapped("\u{1ee9}") },
    Range { from: '\u{1ee9}', to: '\u{1ee9}', mapping: Valid },
    Range { from: '\u{1eea}', to: '\u{1eea}', mapping: Mapped("\u{1eeb}") },
    Range { from: '\u{1eeb}', to: '\u{1eeb}', mapping: Valid },
    Range { from: '\u{1eec}', to: '\u{1eec}', mapping: Mapped("\u{1eed}") },
    Range { from: '\u{1eed}', to: '\u{1eed}', mapping: Valid },
    Range { from: '\u{1eee}', to: '\u{1eee}', mapping: Mapped("\u{1eef}") },
    Range { from: '\u{1eef}', to: '\u{1eef}', mapping: Valid },
    Range { from: '\u{1ef0}', to: '\u{1ef0}', mapping: Mapped("\u{1ef1}") },
    Range { from: '\u{1ef1}', to: '\u{1ef1}', mapping: Valid },
    Range { from: '\u{1ef2}', to: '\u{1ef2}', mapping: Mapped("\u{1ef3}") },
    Range { from: '\u{1ef3}', to: '\u{1ef3}', mapping: Valid },
    Range { from: '\u{1ef4}', to: '\u{1ef4}', mapping: Mapped("\u{1ef5}") },
    Range { from: '\u{1ef5}', to: '\u{1ef5}', mapping: Valid },
    Range { from: '\u{1ef6}', to: '\u{1ef6}', mapping: Mapped("\u{1ef7}") },
    Range { from: '\u{1ef7}', to: '\u{1ef7}', mapping: Valid },
    Range { from: '\u{1ef8}', to: '\u{1ef8}', mapping: Mapped("\u{1ef9}") },
    Range { from: '\u{1ef9}', to: '\u{1ef9}', mapping: Valid },
    Range { from: '\u{1efa}', to: '\u{1efa}', mapping: Mapped("\u{1efb}") },
    Range { from: '\u{1efb}', to: '\u{1efb}', mapping: Valid },
    Range { from: '\u{1efc}', to: '\u{1efc}', mapping: Mapped("\u{1efd}") },
    Range { from: '\u{1efd}', to: '\u{1efd}', mapping: Valid },
    Range { from: '\u{1efe}', to: '\u{1efe}', mapping: Mapped("\u{1eff}") },
    Range { from: '\u{1eff}', to: '\u{1eff}', mapping: Valid },
    Range { from: '\u{2000}', to: '\u{200a}', mapping: DisallowedStd3Mapped("\u{20}") },
    Range { from: '\u{200b}', to: '\u{200b}', mapping: Ignored },
    Range { from: '\u{200c}', to: '\u{200d}', mapping: Deviation("") },
    Range { from: '\u{2010}', to: '\u{2010}', mapping: Valid },
    Range { from: '\u{2011}', to: '\u{2011}', mapping: Mapped("\u{2010}") },
    Range { from: '\u{2012}', to: '\u{2016}', mapping: Valid },
    Range { from: '\u{2017}', to: '\u{2017}', mapping: DisallowedStd3Mapped("\u{20}\u{333}") },
    Range { from: '\u{2018}', to: '\u{2023}', mapping: Valid },
    Range { from: '\u{2024}', to: '\u{2024}', mapping: DisallowedStd3Mapped("\u{2e}") },
    Range { from: '\u{2025}', to: '\u{2025}', mapping: DisallowedStd3Mapped("\u{2e}\u{2e}") },
    Range { from: '\u{2026}', to: '\u{2026}', mapping: DisallowedStd3Mapped("\u{2e}\u{2e}\u{2e}") },
    Range { from: '\u{2027}', to: '\u{2027}', mapping: Valid },
    Range { from: '\u{202f}', to: '\u{202f}', mapping: DisallowedStd3Mapped("\u{20}") },
    Range { from: '\u{2030}', to: '\u{2032}', mapping: Valid },
    Range { from: '\u{2033}', to: '\u{2033}', mapping: Mapped("\u{2032}\u{2032}") },
    Range { from: '\u{2034}', to: '\u{2034}', mapping: Mapped("\u{2032}\u{2032}\u{2032}") },
    Range { from: '\u{2035}', to: '\u{2035}', mapping: Valid },
    Range { from: '\u{2036}', to: '\u{2036}', mapping: Mapped("\u{2035}\u{2035}") },
    Range { from: '\u{2037}', to: '\u{2037}', mapping: Mapped("\u{2035}\u{2035}\u{2035}") },
    Range { from: '\u{2038}', to: '\u{203b}', mapping: Valid },
    Range { from: '\u{203c}', to: '\u{203c}', mapping: DisallowedStd3Mapped("\u{21}\u{21}") },
    Range { from: '\u{203d}', to: '\u{203d}', mapping: Valid },
    Range { from: '\u{203e}', to: '\u{203e}', mapping: DisallowedStd3Mapped("\u{20}\u{305}") },
    Range { from: '\u{203f}', to: '\u{2046}', mapping: Valid },
    Range { from: '\u{2047}', to: '\u{2047}', mapping: DisallowedStd3Mapped("\u{3f}\u{3f}") },
    Range { from: '\u{2048}', to: '\u{2048}', mapping: DisallowedStd3Mapped("\u{3f}\u{21}") },
    Range { from: '\u{2049}', to: '\u{2049}', mapping: DisallowedStd3Mapped("\u{21}\u{3f}") },
    Range { from: '\u{204a}', to: '\u{2056}', mapping: Valid },
    Range { from: '\u{2057}', to: '\u{2057}', mapping: Mapped("\u{2032}\u{2032}\u{2032}\u{2032}") },
    Range { from: '\u{2058}', to: '\u{205e}', mapping: Valid },
    Range { from: '\u{205f}', to: '\u{205f}', mapping: DisallowedStd3Mapped("\u{20}") },
    Range { from: '\u{2060}', to: '\u{2060}', mapping: Ignored },
    Range { from: '\u{2064}', to: '\u{2064}', mapping: Ignored },
    Range { from: '\u{20a0}', to: '\u{20a7}', mapping: Valid },
    Range { from: '\u{20a8}', to: '\u{20a8}', mapping: Mapped("\u{72}\u{73}") },
    Range { from: '\u{20a9}', to: '\u{20bf}', mapping: Valid },
    Range { from: '\u{2100}', to: '\u{2100}', mapping: DisallowedStd3Mapped("\u{61}\u{2f}\u{63}") },
    Range { from: '\u{2101}', to: '\u{2101}', mapping: DisallowedStd3Mapped("\u{61}\u{2f}\u{73}") },
    Range { from: '\u{2102}', to: '\u{2102}', mapping: Mapped("\u{63}") },
    Range { from: '\u{2103}', to: '\u{2103}', mapping: Mapped("\u{b0}\u{63}") },
    Range { from: '\u{2104}', to: '\u{2104}', mapping: Valid },
    Range { from: '\u{2105}', to: '\u{2105}', mapping: DisallowedStd3Mapped("\u{63}\u{2f}\u{6f}") },
    Range { from: '\u{2106}', to: '\u{2106}', mapping: DisallowedStd3Mapped("\u{63}\u{2f}\u{75}") },
    Range { from: '\u{2107}', to: '\u{2107}', mapping: Mapped("\u{25b}") },
    Range { from: '\u{2108}', to: '\u{2108}', mapping: Valid },
    Range { from: '\u{2109}', to: '\u{2109}', mapping: Mapped("\u{b0}\u{66}") },
    Range { from: '\u{210a}', to: '\u{210a}', mapping: Mapped("\u{67}") },
    Range { from: '\u{210b}', to: '\u{210e}', mapping: Mapped("\u{68}") },
    Range { from: '\u{210f}', to: '\u{210f}', mapping: Mapped("\u{127}") },
    Range { from: '\u{2110}', to: '\u{2111}', mapping: Mapped("\u{69}") },
    Range { from: '\u{2112}', to: '\u{2113}', mapping: Mapped("\u{6c}") },
    Range { from: '\u{2114}', to: '\u{2114}', mapping: Valid },
    Range { from: '\u{2115}', to: '\u{2115}', mapping: Mapped("\u{6e}") },
    Range { from: '\u{2116}', to: '\u{2116}', mapping: Mapped("\u{6e}\u{6f}") },
    Range { from: '\u{2117}', to: '\u{2118}', mapping: Valid },
    Range { from: '\u{2119}', to: '\u{2119}', mapping: Mapped("\u{70}") },
    Range { from: '\u{211a}', to: '\u{211a}', mapping: Mapped("\u{71}") },
    Range { from: '\u{211b}', to: '\u{211d}', mapping: Mapped("\u{72}") },
    Range { from: '\u{211e}', to: '\u{211f}', mapping: Valid },
    Range { from: '\u{2120}', to: '\u{2120}', mapping: Mapped("\u{73}\u{6d}") },
    Range { from: '\u{2121}', to: '\u{2121}', mapping: Mapped("\u{74}\u{65}\u{6c}") },
    Range { from: '\u{2122}', to: '\u{2122}', mapping: Mapped("\u{74}\u{6d}") },
    Range { from: '\u{2123}', to: '\u{2123}', mapping: Valid },
    Range { from: '\u{2124}', to: '\u{2124}', mapping: Mapped("\u{7a}") },
    Range { from: '\u{2125}', to: '\u{2125}', mapping: Valid },
    Range { from: '\u{2126}', to: '\u{2126}', mapping: Mapped("\u{3c9}") },
    Range { from: '\u{2127}', to: '\u{2127}', mapping: Valid },
    Range { from: '\u{2128}', to: '\u{2128}', mapping: Mapped("\u{7a}") },
    Range { from: '\u{2129}', to: '\u{2129}', mapping: Valid },
    Range { from: '\u{212a}', to: '\u{212a}', mapping: Mapped("\u{6b}") },
    Range { from: '\u{212b}', to: '\u{212b}', mapping: Mapped("\u{e5}") },
    Range { from: '\u{212c}', to: '\u{212c}', mapping: Mapped("\u{62}") },
    Range { from: '\u{212d}', to: '\u{212d}', mapping: Mapped("\u{63}") },
    Range { from: '\u{212e}', to: '\u{212e}', mapping: Valid },
    Range { from: '\u{212f}', to: '\u{2130}', mapping: Mapped("\u{65}") },
    Range { from: '\u{2131}', to: '\u{2131}', mapping: Mapped("\u{66}") },
    Range { from: '\u{2132}', to: '\u{2132}', mapping: Mapped("\u{214e}") },
    Range { from: '\u{2133}', to: '\u{2133}', mapping: Mapped("\u{6d}") },
    Range { from: '\u{2134}', to: '\u{2134}', mapping: Mapped("\u{6f}") },
    Range { from: '\u{2135}', to: '\u{2135}', mapping: Mapped("\u{5d0}") },
    Range { from: '\u{2136}', to: '\u{2136}', mapping: Mapped("\u{5d1}") },
    Range { from: '\u{2137}', to: '\u{2137}', mapping: Mapped("\u{5d2}") },
    Range { from: '\u{2138}', to: '\u{2138}', mapping: Mapped("\u{5d3}") },
    Range { from: '\u{2139}', to: '\u{2139}', mapping: Mapped("\u{69}") },
    Range { from: '\u{213a}', to: '\u{213a}', mapping: Valid },
    Range { from: '\u{213b}', to: '\u{213b}', mapping: Mapped("\u{66}\u{61}\u{78}") },
    Range { from: '\u{213c}', to: '\u{213c}', mapping: Mapped("\u{3c0}") },
    Range { from: '\u{213d}', to: '\u{213e}', mapping: Mapped("\u{3b3}") },
    Range { from: '\u{213f}', to: '\u{213f}', mapping: Mapped("\u{3c0}") },
    Range { from: '\u{2140}', to: '\u{2140}', mapping: Mapped("\u{2211}") },
    Range { from: '\u{2141}', to: '\u{2144}', mapping: Valid },
    Range { from: '\u{2145}', to: '\u{2146}', mapping: Mapped("\u{64}") },
    Range { from: '\u{2147}', to: '\u{2147}', mapping: Mapped("\u{65}") },
    Range { from: '\u{2148}', to: '\u{2148}', mapping: Mapped("\u{69}") },
    Range { from: '\u{2149}', to: '\u{2149}', mapping: Mapped("\u{6a}") },
    Range { from: '\u{214a}', to: '\u{214f}', mapping: Valid },
    Range { from: '\u{3000}', to: '\u{3000}', mapping: DisallowedStd3Mapped("\u{20}") },
    Range { from: '\u{3001}', to: '\u{3001}', mapping: Valid },
    Range { from: '\u{3002}', to: '\u{3002}', mapping: Mapped("\u{2e}") },
    Range { from: '\u{3003}', to: '\u{3035}', mapping: Valid },
    Range { from: '\u{3036}', to: '\u{3036}', mapping: Mapped("\u{3012}") },
    Range { from: '\u{3037}', to: '\u{3037}', mapping: Valid },
    Range { from: '\u{3038}', to: '\u{3038}', mapping: Mapped("\u{5341}") },
    Range { from: '\u{3039}', to: '\u{3039}', mapping: Mapped("\u{5344}") },
    Range { from: '\u{303a}', to: '\u{303a}', mapping: Mapped("\u{5345}") },
    Range { from: '\u{303b}', to: '\u{303f}', mapping: Valid },
    Range { from: '\u{3041}', to: '\u{3096}', mapping: Valid },
    Range { from: '\u{3099}', to: '\u{309a}', mapping: Valid },
    Range { from: '\u{309b}', to: '\u{309b}', mapping: DisallowedStd3Mapped("\u{20}\u{3099}") },
    Range { from: '\u{309c}', to: '\u{309c}', mapping: DisallowedStd3Mapped("\u{20}\u{309a}") },
    Range { from: '\u{309d}', to: '\u{309e}', mapping: Valid },
    Range { from: '\u{309f}', to: '\u{309f}', mapping: Mapped("\u{3088}\u{308a}") },
    Range { from: '\u{30a0}', to: '\u{30fe}', mapping: Valid },
    Range { from: '\u{30ff}', to: '\u{30ff}', mapping: Mapped("\u{30b3}\u{30c8}") },
    Range { from: '\u{3105}', to: '\u{312d}', mapping: Valid },
    Range { from: '\u{3400}', to: '\u{4dbf}', mapping: Valid },
    Range { from: '\u{4e00}', to: '\u{9fff}', mapping: Valid },
    Range { from: '\u{ac00}', to: '\u{d7a3}', mapping: Valid },
    Range { from: '\u{fb00}', to: '\u{fb00}', mapping: Mapped("\u{66}\u{66}") },
    Range { from: '\u{fb01}', to: '\u{fb01}', mapping: Mapped("\u{66}\u{69}") },
    Range { from: '\u{fb02}', to: '\u{fb02}', mapping: Mapped("\u{66}\u{6c}") },
    Range { from: '\u{fb03}', to: '\u{fb03}', mapping: Mapped("\u{66}\u{66}\u{69}") },
    Range { from: '\u{fb04}', to: '\u{fb04}', mapping: Mapped("\u{66}\u{66}\u{6c}") },
    Range { from: '\u{fb05}', to: '\u{fb06}', mapping: Mapped("\u{73}\u{74}") },
    Range { from: '\u{fb13}', to: '\u{fb13}', mapping: Mapped("\u{574}\u{576}") },
    Range { from: '\u{fb14}', to: '\u{fb14}', mapping: Mapped("\u{574}\u{565}") },
    Range { from: '\u{fb15}', to: '\u{fb15}', mapping: Mapped("\u{574}\u{56b}") },
    Range { from: '\u{fb16}', to: '\u{fb16}', mapping: Mapped("\u{57e}\u{576}") },
    Range { from: '\u{fb17}', to: '\u{fb17}', mapping: Mapped("\u{574}\u{56d}") },
    Range { from: '\u{ff01}', to: '\u{ff01}', mapping: DisallowedStd3Mapped("\u{21}") },
    Range { from: '\u{ff02}', to: '\u{ff02}', mapping: DisallowedStd3Mapped("\u{22}") },
    Range { from: '\u{ff03}', to: '\u{ff03}', mapping: DisallowedStd3Mapped("\u{23}") },
    Range { from: '\u{ff04}', to: '\u{ff04}', mapping: DisallowedStd3Mapped("\u{24}") },
    Range { from: '\u{ff05}', to: '\u{ff05}', mapping: DisallowedStd3Mapped("\u{25}") },
    Range { from: '\u{ff06}', to: '\u{ff06}', mapping: DisallowedStd3Mapped("\u{26}") },
    Range { from: '\u{ff07}', to: '\u{ff07}', mapping: DisallowedStd3Mapped("\u{27}") },
    Range { from: '\u{ff08}', to: '\u{ff08}', mapping: DisallowedStd3Mapped("\u{28}") },
    Range { from: '\u{ff09}', to: '\u{ff09}', mapping: DisallowedStd3Mapped("\u{29}") },
    Range { from: '\u{ff0a}', to: '\u{ff0a}', mapping: DisallowedStd3Mapped("\u{2a}") },
    Range { from: '\u{ff0b}', to: '\u{ff0b}', mapping: DisallowedStd3Mapped("\u{2b}") },
    Range { from: '\u{ff0c}', to: '\u{ff0c}', mapping: DisallowedStd3Mapped("\u{2c}") },
    Range { from: '\u{ff0d}', to: '\u{ff0d}', mapping: Mapped("\u{2d}") },
    Range { from: '\u{ff0e}', to: '\u{ff0e}', mapping: Mapped("\u{2e}") },
    Range { from: '\u{ff0f}', to: '\u{ff0f}', mapping: DisallowedStd3Mapped("\u{2f}") },
    Range { from: '\u{ff10}', to: '\u{ff10}', mapping: Mapped("\u{30}") },
    Range { from: '\u{ff11}', to: '\u{ff11}', mapping: Mapped("\u{31}") },
    Range { from: '\u{ff12}', to: '\u{ff12}', mapping: Mapped("\u{32}") },
    Range { from: '\u{ff13}', to: '\u{ff13}', mapping: Mapped("\u{33}") },
    Range { from: '\u{ff14}', to: '\u{ff14}', mapping: Mapped("\u{34}") },
    Range { from: '\u{ff15}', to: '\u{ff15}', mapping: Mapped("\u{35}") },
    Range { from: '\u{ff16}', to: '\u{ff16}', mapping: Mapped("\u{36}") },
    Range { from: '\u{ff17}', to: '\u{ff17}', mapping: Mapped("\u{37}") },
    Range { from: '\u{ff18}', to: '\u{ff18}', mapping: Mapped("\u{38}") },
    Range { from: '\u{ff19}', to: '\u{ff19}', mapping: Mapped("\u{39}") },
    Range { from: '\u{ff1a}', to: '\u{ff1a}', mapping: DisallowedStd3Mapped("\u{3a}") },
    Range { from: '\u{ff1b}', to: '\u{ff1b}', mapping: DisallowedStd3Mapped("\u{3b}") },
    Range { from: '\u{ff1c}', to: '\u{ff1c}', mapping: DisallowedStd3Mapped("\u{3c}") },
    Range { from: '\u{ff1d}', to: '\u{ff1d}', mapping: DisallowedStd3Mapped("\u{3d}") },
    Range { from: '\u{ff1e}', to: '\u{ff1e}', mapping: DisallowedStd3Mapped("\u{3e}") },
    Range { from: '\u{ff1f}', to: '\u{ff1f}', mapping: DisallowedStd3Mapped("\u{3f}") },
    Range { from: '\u{ff20}', to: '\u{ff20}', mapping: DisallowedStd3Mapped("\u{40}") },
    Range { from: '\u{ff21}', to: '\u{ff21}', mapping: Mapped("\u{61}") },
    Range { from: '\u{ff22}', to: '\u{ff22}', mapping: Mapped("\u{62}") },
    Range { from: '\u{ff23}', to: '\u{ff23}', mapping: Mapped("\u{63}") },
    Range { from: '\u{ff24}', to: '\u{ff24}', mapping: Mapped("\u{64}") },
    Range { from: '\u{ff25}', to: '\u{ff25}', mapping: Mapped("\u{65}") },
    Range { from: '\u{ff26}', to: '\u{ff26}', mapping: Mapped("\u{66}") },
    Range { from: '\u{ff27}', to: '\u{ff27}', mapping: Mapped("\u{67}") },
    Range { from: '\u{ff28}', to: '\u{ff28}', mapping: Mapped("\u{68}") },
    Range { from: '\u{ff29}', to: '\u{ff29}', mapping: Mapped("\u{69}") },
    Range { from: '\u{ff2a}', to: '\u{ff2a}', mapping: Mapped("\u{6a}") },
    Range { from: '\u{ff2b}', to: '\u{ff2b}', mapping: Mapped("\u{6b}") },
    Range { from: '\u{ff2c}', to: '\u{ff2c}', mapping: Mapped("\u{6c}") },
    Range { from: '\u{ff2d}', to: '\u{ff2d}', mapping: Mapped("\u{6d}") },
    Range { from: '\u{ff2e}', to: '\u{ff2e}', mapping: Mapped("\u{6e}") },
    Range { from: '\u{ff2f}', to: '\u{ff2f}', mapping: Mapped("\u{6f}") },
    Range { from: '\u{ff30}', to: '\u{ff30}', mapping: Mapped("\u{70}") },
    Range { from: '\u{ff31}', to: '\u{ff31}', mapping: Mapped("\u{71}") },
    Range { from: '\u{ff32}', to: '\u{ff32}', mapping: Mapped("\u{72}") },
    Range { from: '\u{ff33}', to: '\u{ff33}', mapping: Mapped("\u{73}") },
    Range { from: '\u{ff34}', to: '\u{ff34}', mapping: Mapped("\u{74}") },
    Range { from: '\u{ff35}', to: '\u{ff35}', mapping: Mapped("\u{75}") },
    Range { from: '\u{ff36}', to: '\u{ff36}', mapping: Mapped("\u{76}") },
    Range { from: '\u{ff37}', to: '\u{ff37}', mapping: Mapped("\u{77}") },
    Range { from: '\u{ff38}', to: '\u{ff38}', mapping: Mapped("\u{78}") },
    Range { from: '\u{ff39}', to: '\u{ff39}', mapping: Mapped("\u{79}") },
    Range { from: '\u{ff3a}', to: '\u{ff3a}', mapping: Mapped("\u{7a}") },
    Range { from: '\u{ff3b}', to: '\u{ff3b}', mapping: DisallowedStd3Mapped("\u{5b}") },
    Range { from: '\u{ff3c}', to: '\u{ff3c}', mapping: DisallowedStd3Mapped("\u{5c}") },
    Range { from: '\u{ff3d}', to: '\u{ff3d}', mapping: DisallowedStd3Mapped("\u{5d}") },
    Range { from: '\u{ff3e}', to: '\u{ff3e}', mapping: DisallowedStd3Mapped("\u{5e}") },
    Range { from: '\u{ff3f}', to: '\u{ff3f}', mapping: DisallowedStd3Mapped("\u{5f}") },
    Range { from: '\u{ff40}', to: '\u{ff40}', mapping: DisallowedStd3Mapped("\u{60}") },
    Range { from: '\u{ff41}', to: '\u{ff41}', mapping: Mapped("\u{61}") },
    Range { from: '\u{ff42}', to: '\u{ff42}', mapping: Mapped("\u{62}") },
    Range { from: '\u{ff43}', to: '\u{ff43}', mapping: Mapped("\u{63}") },
    Range { from: '\u{ff44}', to: '\u{ff44}', mapping: Mapped("\u{64}") },
    Range { from: '\u{ff45}', to: '\u{ff45}', mapping: Mapped("\u{65}") },
    Range { from: '\u{ff46}', to: '\u{ff46}', mapping: Mapped("\u{66}") },
    Range { from: '\u{ff47}', to: '\u{ff47}', mapping: Mapped("\u{67}") },
    Range { from: '\u{ff48}', to: '\u{ff48}', mapping: Mapped("\u{68}") },
    Range { from: '\u{ff49}', to: '\u{ff49}', mapping: Mapped("\u{69}") },
    Range { from: '\u{ff4a}', to: '\u{ff4a}', mapping: Mapped("\u{6a}") },
    Range { from: '\u{ff4b}', to: '\u{ff4b}', mapping: Mapped("\u{6b}") },
    Range { from: '\u{ff4c}', to: '\u{ff4c}', mapping: Mapped("\u{6c}") },
    Range { from: '\u{ff4d}', to: '\u{ff4d}', mapping: Mapped("\u{6d}") },
    Range { from: '\u{ff4e}', to: '\u{ff4e}', mapping: Mapped("\u{6e}") },
    Range { from: '\u{ff4f}', to: '\u{ff4f}', mapping: Mapped("\u{6f}") },
    Range { from: '\u{ff50}', to: '\u{ff50}', mapping: Mapped("\u{70}") },
    Range { from: '\u{ff51}', to: '\u{ff51}', mapping: Mapped("\u{71}") },
    Range { from: '\u{ff52}', to: '\u{ff52}', mapping: Mapped("\u{72}") },
    Range { from: '\u{ff53}', to: '\u{ff53}', mapping: Mapped("\u{73}") },
    Range { from: '\u{ff54}', to: '\u{ff54}', mapping: Mapped("\u{74}") },
    Range { from: '\u{ff55}', to: '\u{ff55}', mapping: Mapped("\u{75}") },
    Range { from: '\u{ff56}', to: '\u{ff56}', mapping: Mapped("\u{76}") },
    Range { from: '\u{ff57}', to: '\u{ff57}', mapping: Mapped("\u{77}") },
    Range { from: '\u{ff58}', to: '\u{ff58}', mapping: Mapped("\u{78}") },
    Range { from: '\u{ff59}', to: '\u{ff59}', mapping: Mapped("\u{79}") },
    Range { from: '\u{ff5a}', to: '\u{ff5a}', mapping: Mapped("\u{7a}") },
    Range { from: '\u{ff5b}', to: '\u{ff5b}', mapping: DisallowedStd3Mapped("\u{7b}") },
    Range { from: '\u{ff5c}', to: '\u{ff5c}', mapping: DisallowedStd3Mapped("\u{7c}") },
    Range { from: '\u{ff5d}', to: '\u{ff5d}', mapping: DisallowedStd3Mapped("\u{7d}") },
    Range { from: '\u{ff5e}', to: '\u{ff5e}', mapping: DisallowedStd3Mapped("\u{7e}") },
    Range { from: '\u{ff5f}', to: '\u{ff5f}', mapping: Mapped("\u{2985}") },
    Range { from: '\u{ff60}', to: '\u{ff60}', mapping: Mapped("\u{2986}") },
    Range { from: '\u{ff61}', to: '\u{ff61}', mapping: Mapped("\u{2e}") },
    Range { from: '\u{ff62}', to: '\u{ff62}', mapping: Mapped("\u{300c}") },
    Range { from: '\u{ff63}', to: '\u{ff63}', mapping: Mapped("\u{300d}") },
    Range { from: '\u{ff64}', to: '\u{ff64}', mapping: Mapped("\u{3001}") },
    Range { from: '\u{ff65}', to: '\u{ff65}', mapping: Mapped("\u{30fb}") },
    Range { from: '\u{ff66}', to: '\u{ff66}', mapping: Mapped("\u{30f2}") },
    Range { from: '\u{ff67}', to: '\u{ff67}', mapping: Mapped("\u{30a1}") },
    Range { from: '\u{ff68}', to: '\u{ff68}', mapping: Mapped("\u{30a3}") },
    Range { from: '\u{ff69}', to: '\u{ff69}', mapping: Mapped("\u{30a5}") },
    Range { from: '\u{ff6a}', to: '\u{ff6a}', mapping: Mapped("\u{30a7}") },
    Range { from: '\u{ff6b}', to: '\u{ff6b}', mapping: Mapped("\u{30a9}") },
    Range { from: '\u{ff6c}', to: '\u{ff6c}', mapping: Mapped("\u{30e3}") },
    Range { from: '\u{ff6d}', to: '\u{ff6d}', mapping: Mapped("\u{30e5}") },
    Range { from: '\u{ff6e}', to: '\u{ff6e}', mapping: Mapped("\u{30e7}") },
    Range { from: '\u{ff6f}', to: '\u{ff6f}', mapping: Mapped("\u{30c3}") },
    Range { from: '\u{ff70}', to: '\u{ff70}', mapping: Mapped("\u{30fc}") },
    Range { from: '\u{ff71}', to: '\u{ff71}', mapping: Mapped("\u{30a2}") },
    Range { from: '\u{ff72}', to: '\u{ff72}', mapping: Mapped("\u{30a4}") },
    Range { from: '\u{ff73}', to: '\u{ff73}', mapping: Mapped("\u{30a6}") },
    Range { from: '\u{ff74}', to: '\u{ff74}', mapping: Mapped("\u{30a8}") },
    Range { from: '\u{ff75}', to: '\u{ff75}', mapping: Mapped("\u{30aa}") },
    Range { from: '\u{ff76}', to: '\u{ff76}', mapping: Mapped("\u{30ab}") },
    Range { from: '\u{ff77}', to: '\u{ff77}', mapping: Mapped("\u{30ad}") },
    Range { from: '\u{ff78}', to: '\u{ff78}', mapping: Mapped("\u{30af}") },
    Range { from: '\u{ff79}', to: '\u{ff79}', mapping: Mapped("\u{30b1}") },
    Range { from: '\u{ff7a}', to: '\u{ff7a}', mapping: Mapped("\u{30b3}") },
    Range { from: '\u{ff7b}', to: '\u{ff7b}', mapping: Mapped("\u{30b5}") },
    Range { from: '\u{ff7c}', to: '\u{ff7c}', mapping: Mapped("\u{30b7}") },
    Range { from: '\u{ff7d}', to: '\u{ff7d}', mapping: Mapped("\u{30b9}") },
    Range { from: '\u{ff7e}', to: '\u{ff7e}', mapping: Mapped("\u{30bb}") },
    Range { from: '\u{ff7f}', to: '\u{ff7f}', mapping: Mapped("\u{30bd}") },
    Range { from: '\u{ff80}', to: '\u{ff80}', mapping: Mapped("\u{30bf}") },
    Range { from: '\u{ff81}', to: '\u{ff81}', mapping: Mapped("\u{30c1}") },
    Range { from: '\u{ff82}', to: '\u{ff82}', mapping: Mapped("\u{30c4}") },
    Range { from: '\u{ff83}', to: '\u{ff83}', mapping: Mapped("\u{30c6}") },
    Range { from: '\u{ff84}', to: '\u{ff84}', mapping: Mapped("\u{30c8}") },
    Range { from: '\u{ff85}', to: '\u{ff85}', mapping: Mapped("\u{30ca}") },
    Range { from: '\u{ff86}', to: '\u{ff86}', mapping: Mapped("\u{30cb}") },
    Range { from: '\u{ff87}', to: '\u{ff87}', mapping: Mapped("\u{30cc}") },
    Range { from: '\u{ff88}', to: '\u{ff88}', mapping: Mapped("\u{30cd}") },
    Range { from: '\u{ff89}', to: '\u{ff89}', mapping: Mapped("\u{30ce}") },
    Range { from: '\u{ff8a}', to: '\u{ff8a}', mapping: Mapped("\u{30cf}") },
    Range { from: '\u{ff8b}', to: '\u{ff8b}', mapping: Mapped("\u{30d2}") },
    Range { from: '\u{ff8c}', to: '\u{ff8c}', mapping: Mapped("\u{30d5}") },
    Range { from: '\u{ff8d}', to: '\u{ff8d}', mapping: Mapped("\u{30d8}") },
    Range { from: '\u{ff8e}', to: '\u{ff8e}', mapping: Mapped("\u{30db}") },
    Range { from: '\u{ff8f}', to: '\u{ff8f}', mapping: Mapped("\u{30de}") },
    Range { from: '\u{ff90}', to: '\u{ff90}', mapping: Mapped("\u{30df}") },
    Range { from: '\u{ff91}', to: '\u{ff91}', mapping: Mapped("\u{30e0}") },
    Range { from: '\u{ff92}', to: '\u{ff92}', mapping: Mapped("\u{30e1}") },
    Range { from: '\u{ff93}', to: '\u{ff93}', mapping: Mapped("\u{30e2}") },
    Range { from: '\u{ff94}', to: '\u{ff94}', mapping: Mapped("\u{30e4}") },
    Range { from: '\u{ff95}', to: '\u{ff95}', mapping: Mapped("\u{30e6}") },
    Range { from: '\u{ff96}', to: '\u{ff96}', mapping: Mapped("\u{30e8}") },
    Range { from: '\u{ff97}', to: '\u{ff97}', mapping: Mapped("\u{30e9}") },
    Range { from: '\u{ff98}', to: '\u{ff98}', mapping: Mapped("\u{30ea}") },
    Range { from: '\u{ff99}', to: '\u{ff99}', mapping: Mapped("\u{30eb}") },
    Range { from: '\u{ff9a}', to: '\u{ff9a}', mapping: Mapped("\u{30ec}") },
    Range { from: '\u{ff9b}', to: '\u{ff9b}', mapping: Mapped("\u{30ed}") },
    Range { from: '\u{ff9c}', to: '\u{ff9c}', mapping: Mapped("\u{30ef}") },
    Range { from: '\u{ff9d}', to: '\u{ff9d}', mapping: Mapped("\u{30f3}") },
    Range { from: '\u{ff9e}', to: '\u{ff9e}', mapping: Mapped("\u{3099}") },
    Range { from: '\u{ff9f}', to: '\u{ff9f}', mapping: Mapped("\u{309a}") },
    Range { from: '\u{ffa1}', to: '\u{ffa1}', mapping: Mapped("\u{1100}") },
    Range { from: '\u{ffa2}', to: '\u{ffa2}', mapping: Mapped("\u{1101}") },
    Range { from: '\u{ffa3}', to: '\u{ffa3}', mapping: Mapped("\u{11aa}") },
    Range { from: '\u{ffa4}', to: '\u{ffa4}', mapping: Mapped("\u{1102}") },
    Range { from: '\u{ffa5}', to: '\u{ffa5}', mapping: Mapped("\u{11ac}") },
    Range { from: '\u{ffa6}', to: '\u{ffa6}', mapping: Mapped("\u{11ad}") },
    Range { from: '\u{ffa7}', to: '\u{ffa7}', mapping: Mapped("\u{1103}") },
    Range { from: '\u{ffa8}', to: '\u{ffa8}', mapping: Mapped("\u{1104}") },
    Range { from: '\u{ffa9}', to: '\u{ffa9}', mapping: Mapped("\u{1105}") },
    Range { from: '\u{ffaa}', to: '\u{ffaa}', mapping: Mapped("\u{11b0}") },
    Range { from: '\u{ffab}', to: '\u{ffab}', mapping: Mapped("\u{11b1}") },
    Range { from: '\u{ffac}', to: '\u{ffac}', mapping: Mapped("\u{11b2}") },
    Range { from: '\u{ffad}', to: '\u{ffad}', mapping: Mapped("\u{11b3}") },
    Range { from: '\u{ffae}', to: '\u{ffae}', mapping: Mapped("\u{11b4}") },
    Range { from: '\u{ffaf}', to: '\u{ffaf}', mapping: Mapped("\u{11b5}") },
    Range { from: '\u{ffb0}', to: '\u{ffb0}', mapping: Mapped("\u{111a}") },
    Range { from: '\u{ffb1}', to: '\u{ffb1}', mapping: Mapped("\u{1106}") },
    Range { from: '\u{ffb2}', to: '\u{ffb2}', mapping: Mapped("\u{1107}") },
    Range { from: '\u{ffb3}', to: '\u{ffb3}', mapping: Mapped("\u{1108}") },
    Range { from: '\u{ffb4}', to: '\u{ffb4}', mapping: Mapped("\u{1121}") },
    Range { from: '\u{ffb5}', to: '\u{ffb5}', mapping: Mapped("\u{1109}") },
    Range { from: '\u{ffb6}', to: '\u{ffb6}', mapping: Mapped("\u{110a}") },
    Range { from: '\u{ffb7}', to: '\u{ffb7}', mapping: Mapped("\u{110b}") },
    Range { from: '\u{ffb8}', to: '\u{ffb8}', mapping: Mapped("\u{110c}") },
    Range { from: '\u{ffb9}', to: '\u{ffb9}', mapping: Mapped("\u{110d}") },
    Range { from: '\u{ffba}', to: '\u{ffba}', mapping: Mapped("\u{110e}") },
    Range { from: '\u{ffbb}', to: '\u{ffbb}', mapping: Mapped("\u{110f}") },
    Range { from: '\u{ffbc}', to: '\u{ffbc}', mapping: Mapped("\u{1110}") },
    Range { from: '\u{ffbd}', to: '\u{ffbd}', mapping: Mapped("\u{1111}") },
    Range { from: '\u{ffbe}', to: '\u{ffbe}', mapping: Mapped("\u{1112}") },
    Range { from: '\u{ffc2}', to: '\u{ffc2}', mapping: Mapped("\u{1161}") },
    Range { from: '\u{ffc3}', to: '\u{ffc3}', mapping: Mapped("\u{1162}") },
    Range { from: '\u{ffc4}', to: '\u{ffc4}', mapping: Mapped("\u{1163}") },
    Range { from: '\u{ffc5}', to: '\u{ffc5}', mapping: Mapped("\u{1164}") },
    Range { from: '\u{ffc6}', to: '\u{ffc6}', mapping: Mapped("\u{1165}") },
    Range { from: '\u{ffc7}', to: '\u{ffc7}', mapping: Mapped("\u{1166}") },
    Range { from: '\u{ffca}', to: '\u{ffca}', mapping: Mapped("\u{1167}") },
    Range { from: '\u{ffcb}', to: '\u{ffcb}', mapping: Mapped("\u{1168}") },
    Range { from: '\u{ffcc}', to: '\u{ffcc}', mapping: Mapped("\u{1169}") },
    Range { from: '\u{ffcd}', to: '\u{ffcd}', mapping: Mapped("\u{116a}") },
    Range { from: '\u{ffce}', to: '\u{ffce}', mapping: Mapped("\u{116b}") },
    Range { from: '\u{ffcf}', to: '\u{ffcf}', mapping: Mapped("\u{116c}") },
    Range { from: '\u{ffd2}', to: '\u{ffd2}', mapping: Mapped("\u{116d}") },
    Range { from: '\u{ffd3}', to: '\u{ffd3}', mapping: Mapped("\u{116e}") },
    Range { from: '\u{ffd4}', to: '\u{ffd4}', mapping: Mapped("\u{116f}") },
    Range { from: '\u{ffd5}', to: '\u{ffd5}', mapping: Mapped("\u{1170}") },
    Range { from: '\u{ffd6}', to: '\u{ffd6}', mapping: Mapped("\u{1171}") },
    Range { from: '\u{ffd7}', to: '\u{ffd7}', mapping: Mapped("\u{1172}") },
    Range { from: '\u{ffda}', to: '\u{ffda}', mapping: Mapped("\u{1173}") },
    Range { from: '\u{ffdb}', to: '\u{ffdb}', mapping: Mapped("\u{1174}") },
    Range { from: '\u{ffdc}', to: '\u{ffdc}', mapping: Mapped("\u{1175}") },
    Range { from: '\u{ffe0}', to: '\u{ffe0}', mapping: Mapped("\u{a2}") },
    Range { from: '\u{ffe1}', to: '\u{ffe1}', mapping: Mapped("\u{a3}") },
    Range { from: '\u{ffe2}', to: '\u{ffe2}', mapping: Mapped("\u{ac}") },
    Range { from: '\u{ffe3}', to: '\u{ffe3}', mapping: DisallowedStd3Mapped("\u{20}\u{304}") },
    Range { from: '\u{ffe4}', to: '\u{ffe4}', mapping: Mapped("\u{a6}") },
    Range { from: '\u{ffe5}', to: '\u{ffe5}', mapping: Mapped("\u{a5}") },
    Range { from: '\u{ffe6}', to: '\u{ffe6}', mapping: Mapped("\u{20a9}") },
    Range { from: '\u{ffe8}', to: '\u{ffe8}', mapping: Mapped("\u{2502}") },
    Range { from: '\u{ffe9}', to: '\u{ffe9}', mapping: Mapped("\u{2190}") },
    Range { from: '\u{ffea}', to: '\u{ffea}', mapping: Mapped("\u{2191}") },
    Range { from: '\u{ffeb}', to: '\u{ffeb}', mapping: Mapped("\u{2192}") },
    Range { from: '\u{ffec}', to: '\u{ffec}', mapping: Mapped("\u{2193}") },
    Range { from: '\u{ffed}', to: '\u{ffed}', mapping: Mapped("\u{25a0}") },
    Range { from: '\u{ffee}', to: '\u{ffee}', mapping: Mapped("\u{25cb}") },
    Range { from: '\u{20000}', to: '\u{2a6df}', mapping: Valid },
];
