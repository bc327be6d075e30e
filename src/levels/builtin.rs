use crate::levels::{GlyphSpec, LevelDefinition, PlateSpec, layout};

/// The built-in levels, in play order. The tutorial comes first.
pub fn builtin_levels() -> Vec<LevelDefinition> {
    vec![
        tutorial(),
        boxed_in(),
        breakout(),
        hallway_hijinks(),
        four_door(),
        the_boombox(),
        master_and_commander(),
        watergate(),
    ]
}

fn tutorial() -> LevelDefinition {
    LevelDefinition {
        name: "Tutorial".into(),
        status: "Use the arrow keys to control the blue bead".into(),
        layout: layout(r#"
####################
####################
####  b   #  g  ####
####      #     ####
####      #     ####
####1   2 D     ####
####      D     ####
####      #     ####
####      #     ####
####      D     ####
####      D     ####
####      #     ####
####      ###D######
####      # x $ ####
####      #     ####
####      #     ####
####      #     ####
####  G   #  B  ####
####################
####################
"#),
        plates: vec![
            PlateSpec::vertical((4, 5), (10, 9), 2),
            PlateSpec::vertical((8, 5), (10, 5), 2),
            PlateSpec::horizontal((12, 13), (13, 12), 1),
        ],
        glyphs: vec![],
    }
}

fn boxed_in() -> LevelDefinition {
    LevelDefinition {
        name: "Boxed In".into(),
        status: "Boxed In".into(),
        layout: layout(r#"
####################
#                  #
#                  #
#           ###### #
#           #    # #
#       #####  G # #
#           D    # #
#     # #$# ###### #
#     # $B$ #      #
#     # #$# #      #
#        x         #
#       ###        #
#1                 #
#                  #
#                  #
#DD##############DD#
#      #  $        #
#b    2###$###    g#
#         $  #     #
####################
"#),
        plates: vec![
            PlateSpec::horizontal((1, 12), (1, 15), 2),
            PlateSpec::horizontal((6, 17), (17, 15), 2),
            PlateSpec::vertical((9, 10), (12, 6), 1),
        ],
        glyphs: vec![],
    }
}

fn breakout() -> LevelDefinition {
    LevelDefinition {
        name: "Breakout!".into(),
        status: "Breakout!".into(),
        layout: layout(r#"
####################
#    #             #
# B  #          G  #
#  #D#             #
#### #       #######
#  #x $      #  2  #
#  #  $      #     #
#  ###       #  g  #
#    #       D     #
#    #       #     #
######       #######
#   # x      #     #
# $ #        D  x  #
#   D        #     #
##### 2      #######
#            #     #
#            #     #
#            D  b  #
#            #     #
####################
"#),
        plates: vec![
            PlateSpec::horizontal((4, 5), (4, 3), 1),
            PlateSpec::vertical((6, 11), (13, 12), 1),
            PlateSpec::vertical((6, 14), (4, 13), 1),
            PlateSpec::vertical((16, 5), (13, 17), 1),
            PlateSpec::vertical((16, 12), (13, 8), 1),
        ],
        glyphs: vec![],
    }
}

fn hallway_hijinks() -> LevelDefinition {
    LevelDefinition {
        name: "Hallway Hijinks".into(),
        status: "Hallway Hijinks".into(),
        layout: layout(r#"
####################
#b D   D  #       g#
#  D   D$ # 2      #
#  D   D  #        #
####   #########DDD#
#        1#        #
# $       #        #
#         #        #
#        x#DDD######
#      ## #        #
#       #x# 2      #
#######D#####DDDDDD#
#         #x#      #
#         # #      #
#         # #      #
#         $ #      #
#         $ #      #
#         $ #      #
#B        #       G#
####################
"#),
        plates: vec![
            PlateSpec::horizontal((9, 5), (16, 4), 3),
            PlateSpec::horizontal((9, 8), (11, 8), 3),
            PlateSpec::horizontal((9, 10), (13, 11), 6),
            PlateSpec::horizontal((11, 12), (7, 11), 1),
            PlateSpec::vertical((12, 2), (3, 1), 3),
            PlateSpec::vertical((12, 10), (7, 1), 3),
        ],
        glyphs: vec![],
    }
}

fn four_door() -> LevelDefinition {
    LevelDefinition {
        name: "Four Door and Seven Years Ago...".into(),
        status: "Four Door and Seven Years Ago...".into(),
        layout: layout(r#"
####################
#          #       #
# ##### ## # 1 $ x #
# #x  #  $ #       #
# ##     # #       #
# ## ##### ## ###  #
#          #  $ $# #
#########D####   ###
#             $$$# #
#                  #
#                  #
###  ###   #####D###
#      #G B##  #   #
#    ###DDD##      #
#  ##x #DDD## # #  #
#  #   #DDD## #$ $ #
#  #   #DDD## #    #
#    2 #   #  ######
#      #b g#      x#
####################
"#),
        plates: vec![
            PlateSpec::horizontal((3, 3), (8, 13), 3),
            PlateSpec::horizontal((5, 14), (8, 15), 3),
            PlateSpec::horizontal((5, 17), (16, 11), 1),
            PlateSpec::horizontal((13, 2), (9, 7), 1),
            PlateSpec::horizontal((17, 2), (8, 14), 3),
            PlateSpec::horizontal((18, 18), (8, 16), 3),
        ],
        glyphs: vec![],
    }
}

fn the_boombox() -> LevelDefinition {
    LevelDefinition {
        name: "The Boombox".into(),
        status: "The Boombox".into(),
        layout: layout(r#"
####################
#    D             #
# x  D   ###########
#    ##  ##  #   ###
#     #  ##x$D x   #
#     #x ##  #   # #
#### ########## #  #
# 1#D########## ##D#
#   $ #  DbD  # #  #
#B   $D xD Dx D $ G#
#   $ #  DgD  # #  #
# 1#D########## ##D#
#### ########## #  #
#### ##x ###### #  #
#     #  ##  #   # #
#     #  ##x$D x   #
#    ##  ##  #   ###
# x  D   ###########
#    D             #
####################
"#),
        plates: vec![
            PlateSpec::vertical((2, 2), (13, 4), 1),
            PlateSpec::horizontal((2, 7), (18, 7), 1),
            PlateSpec::horizontal((2, 11), (18, 11), 1),
            PlateSpec::vertical((2, 17), (13, 15), 1),
            PlateSpec::vertical((7, 5), (6, 9), 1),
            PlateSpec::vertical((7, 13), (14, 9), 1),
            PlateSpec::vertical((8, 9), (9, 8), 3),
            PlateSpec::vertical((11, 4), (5, 1), 2),
            PlateSpec::vertical((11, 15), (5, 17), 2),
            PlateSpec::vertical((12, 9), (11, 8), 3),
            PlateSpec::horizontal((15, 4), (4, 7), 1),
            PlateSpec::horizontal((15, 15), (4, 11), 1),
        ],
        glyphs: vec![
            GlyphSpec::new((6, 8), '\u{264F}'),
            GlyphSpec::new((6, 10), '\u{264F}'),
            GlyphSpec::new((7, 5), '\u{264F}'),
            GlyphSpec::new((7, 13), '\u{2648}'),
            GlyphSpec::new((14, 8), '\u{2648}'),
            GlyphSpec::new((14, 10), '\u{2648}'),
        ],
    }
}

fn master_and_commander() -> LevelDefinition {
    LevelDefinition {
        name: "Master and Commander".into(),
        status: "Master and Commander".into(),
        layout: layout(r#"
####################
#    #  #   #      #
# #  D      # #D#  #
#  # ## #   # # #  #
#    D  #   D   Dx #
#DD### #x#  D # #  #
#      #D###### #  #
#  ####1$     # #  #
#  #  # x  x 1# ####
#     #       #    #
#     # x $x  #    #
####  #  B   ###   #
####   ##DD##   # ##
####    #  #  $ # ##
#####   # b# #D## ##
######  #### # ## ##
#####x  #### # #  ##
######g #### Dx   ##
######  ####G###  ##
####################
"#),
        plates: vec![
            PlateSpec::horizontal((11, 10), (14, 14), 1),
            PlateSpec::vertical((14, 17), (13, 17), 1),
            PlateSpec::vertical((11, 8), (16, 4), 1),
            PlateSpec::horizontal((13, 8), (15, 2), 1),
            PlateSpec::horizontal((17, 4), (8, 6), 1),
            PlateSpec::vertical((8, 5), (12, 4), 2),
            PlateSpec::vertical((8, 8), (5, 2), 1),
            PlateSpec::horizontal((7, 7), (1, 5), 2),
            PlateSpec::vertical((8, 10), (5, 4), 1),
            PlateSpec::horizontal((5, 16), (9, 12), 2),
        ],
        glyphs: vec![],
    }
}

fn watergate() -> LevelDefinition {
    LevelDefinition {
        name: "Watergate".into(),
        status: "Watergate by Josh Allard".into(),
        layout: layout(r#"
####################
#BG#x    #x        #
#  D     D     #   #
#$ #$$$$$### # $   #
#  #     1 #D# #   #
#x##########$### ###
#xD D       x      #
#############D######
#       #  b# $$   #
#      1#   # $$x# #
#D#     D $ # $$$# #
#D####### $ #   xD #
#       D $ #D####D#
#       #2  #      #
#$$$x$$$#  g#    #x#
#       ##########x#
#$$$x$$$# #        #
#         D ######$#
#$$$ $$$# #        #
####################
"#),
        plates: vec![
            PlateSpec::vertical((1, 5), (2, 6), 1),
            PlateSpec::vertical((4, 1), (3, 2), 1),
            PlateSpec::horizontal((9, 4), (12, 4), 1),
            PlateSpec::horizontal((12, 6), (13, 7), 1),
            PlateSpec::vertical((1, 6), (4, 6), 1),
            PlateSpec::vertical((10, 1), (9, 2), 1),
            PlateSpec::horizontal((16, 11), (13, 12), 1),
            PlateSpec::vertical((16, 9), (17, 11), 1),
            PlateSpec::horizontal((18, 15), (18, 12), 1),
            PlateSpec::vertical((18, 14), (10, 17), 1),
            PlateSpec::vertical((7, 9), (8, 10), 1),
            PlateSpec::vertical((9, 13), (8, 12), 1),
            PlateSpec::horizontal((4, 16), (1, 11), 1),
            PlateSpec::horizontal((4, 14), (1, 10), 1),
        ],
        glyphs: vec![
            GlyphSpec::new((16, 11), '\u{264B}'),
            GlyphSpec::new((12, 12), '\u{264B}'),
            GlyphSpec::new((14, 12), '\u{264B}'),
            GlyphSpec::new((18, 15), '\u{2650}'),
            GlyphSpec::new((17, 12), '\u{2650}'),
            GlyphSpec::new((19, 12), '\u{2650}'),
            GlyphSpec::new((18, 14), '\u{2649}'),
            GlyphSpec::new((10, 16), '\u{2649}'),
            GlyphSpec::new((10, 18), '\u{2649}'),
        ],
    }
}
